//! Faceted employee builder.
//!
//! [`EmployeeBuilder`] owns one shared `Employee` for the whole build session.
//! The address and job facets receive a handle to that same instance, so
//! switching between facets keeps every field set so far.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, trace};

/// Product of the faceted builder: address fields and job fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Employee {
    // address
    pub street_name: String,
    pub post_code: String,

    // job
    pub salary: i32,
    pub title: String,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StreetName: {}, PostCode: {}, Salary: {}, Title: {}",
            self.street_name, self.post_code, self.salary, self.title
        )
    }
}

type SharedEmployee = Rc<RefCell<Employee>>;

/// Entry point of a faceted build session.
///
/// Not `Clone`: a new session always starts from [`EmployeeBuilder::new`].
#[derive(Debug, Default)]
pub struct EmployeeBuilder {
    employee: SharedEmployee,
}

impl EmployeeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Address facet bound to this session's employee.
    pub fn address(&self) -> EmployeeAddressBuilder {
        EmployeeAddressBuilder {
            builder: self.handle(),
        }
    }

    /// Job facet bound to this session's employee.
    pub fn job(&self) -> EmployeeJobBuilder {
        EmployeeJobBuilder {
            builder: self.handle(),
        }
    }

    /// True if both builders mutate the same employee.
    pub fn shares_product_with(&self, other: &EmployeeBuilder) -> bool {
        Rc::ptr_eq(&self.employee, &other.employee)
    }

    /// Finish the session and take the employee.
    ///
    /// If another facet of the session is still alive, returns a snapshot of
    /// the current state instead.
    pub fn build(self) -> Employee {
        let employee = match Rc::try_unwrap(self.employee) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => {
                trace!("build: session still shared, returning snapshot");
                shared.borrow().clone()
            }
        };
        debug!("build: {}", employee);
        employee
    }

    fn handle(&self) -> EmployeeBuilder {
        EmployeeBuilder {
            employee: Rc::clone(&self.employee),
        }
    }

    fn update(&self, f: impl FnOnce(&mut Employee)) {
        f(&mut *self.employee.borrow_mut());
    }
}

impl From<EmployeeBuilder> for Employee {
    fn from(builder: EmployeeBuilder) -> Self {
        builder.build()
    }
}

/// Operations available on every facet: switching facets and finishing.
pub trait EmployeeFacet: Sized {
    /// The session this facet writes to.
    fn session(&self) -> &EmployeeBuilder;

    fn into_session(self) -> EmployeeBuilder;

    fn address(self) -> EmployeeAddressBuilder {
        EmployeeAddressBuilder {
            builder: self.into_session(),
        }
    }

    fn job(self) -> EmployeeJobBuilder {
        EmployeeJobBuilder {
            builder: self.into_session(),
        }
    }

    fn build(self) -> Employee {
        self.into_session().build()
    }
}

/// Facet for the address fields.
#[derive(Debug)]
pub struct EmployeeAddressBuilder {
    builder: EmployeeBuilder,
}

impl EmployeeAddressBuilder {
    pub fn set_street_name(self, street_name: impl Into<String>) -> Self {
        let street_name = street_name.into();
        trace!("set_street_name: {}", street_name);
        self.builder.update(|e| e.street_name = street_name);
        self
    }

    pub fn set_post_code(self, post_code: impl Into<String>) -> Self {
        let post_code = post_code.into();
        trace!("set_post_code: {}", post_code);
        self.builder.update(|e| e.post_code = post_code);
        self
    }
}

impl EmployeeFacet for EmployeeAddressBuilder {
    fn session(&self) -> &EmployeeBuilder {
        &self.builder
    }

    fn into_session(self) -> EmployeeBuilder {
        self.builder
    }
}

/// Facet for the job fields.
#[derive(Debug)]
pub struct EmployeeJobBuilder {
    builder: EmployeeBuilder,
}

impl EmployeeJobBuilder {
    pub fn set_salary(self, salary: i32) -> Self {
        trace!("set_salary: {}", salary);
        self.builder.update(|e| e.salary = salary);
        self
    }

    pub fn set_title(self, title: impl Into<String>) -> Self {
        let title = title.into();
        trace!("set_title: {}", title);
        self.builder.update(|e| e.title = title);
        self
    }
}

impl EmployeeFacet for EmployeeJobBuilder {
    fn session(&self) -> &EmployeeBuilder {
        &self.builder
    }

    fn into_session(self) -> EmployeeBuilder {
        self.builder
    }
}

impl From<EmployeeAddressBuilder> for Employee {
    fn from(facet: EmployeeAddressBuilder) -> Self {
        facet.build()
    }
}

impl From<EmployeeJobBuilder> for Employee {
    fn from(facet: EmployeeJobBuilder) -> Self {
        facet.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_facets_from_one_builder_when_comparing_then_they_share_the_product() {
        let builder = EmployeeBuilder::new();
        let address = builder.address();
        let job = builder.job();

        assert!(address.session().shares_product_with(&builder));
        assert!(job.session().shares_product_with(address.session()));
        assert!(!EmployeeBuilder::new().shares_product_with(&builder));
    }

    #[test]
    fn given_untouched_builder_when_building_then_fields_are_defaults() {
        assert_eq!(EmployeeBuilder::new().build(), Employee::default());
    }
}
