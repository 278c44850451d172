//! Tests for the staged person builders

use rstest::rstest;

use fluentbuild::domain::{Person, PersonBuilderBase, PersonInfoBuilder, PersonJobBuilder};
use fluentbuild::util::testing;

#[test]
fn given_name_and_job_when_chaining_stages_then_builds_person() {
    testing::init_test_setup();

    // Act
    let person = Person::builder().set_name("Rafi").set_job("SDE").build();

    // Assert
    assert_eq!(
        person,
        Person {
            name: "Rafi".to_string(),
            job: "SDE".to_string(),
        }
    );
    assert_eq!(person.to_string(), "Name: Rafi, Job: SDE");
}

#[rstest]
fn given_either_setter_order_when_building_then_product_is_identical(
    #[values("Rafi", "", "Ada Lovelace", "multi\nline")] name: &str,
    #[values("SDE", "", "Data Engineer", "Rafi")] job: &str,
) {
    // Act
    let name_first = Person::builder().set_name(name).set_job(job).build();
    let job_first = Person::builder().set_job(job).set_name(name).build();

    // Assert
    assert_eq!(name_first, job_first);
    assert_eq!(name_first.name, name);
    assert_eq!(name_first.job, job);
}

#[test]
fn given_only_job_when_building_then_name_defaults_to_empty() {
    let person = Person::builder().set_job("SDE").build();

    assert_eq!(person.name, "");
    assert_eq!(person.job, "SDE");
}

#[test]
fn given_repeated_setter_when_building_then_last_value_wins() {
    let person = Person::builder()
        .set_name("first")
        .set_job("SDE")
        .set_name("second")
        .build();

    assert_eq!(person.name, "second");
}

#[test]
fn given_builder_when_converting_then_from_matches_build() {
    let person: Person = Person::builder().set_name("Rafi").into();

    assert_eq!(person.name, "Rafi");
}

// ============================================================
// Self type: stage setters return the caller's concrete builder
// ============================================================

/// Builder defined outside the crate that also counts setter calls.
#[derive(Default)]
struct CountingBuilder {
    person: Person,
    writes: usize,
}

impl PersonBuilderBase for CountingBuilder {
    fn person_mut(&mut self) -> &mut Person {
        self.writes += 1;
        &mut self.person
    }
}

impl CountingBuilder {
    fn finish(self) -> (Person, usize) {
        (self.person, self.writes)
    }
}

#[test]
fn given_custom_builder_when_crossing_stages_then_chain_keeps_custom_type() {
    // Act: finish() only exists on CountingBuilder, so both setters must return it
    let (person, writes) = CountingBuilder::default()
        .set_name("Rafi")
        .set_job("SDE")
        .finish();

    // Assert
    assert_eq!(person.to_string(), "Name: Rafi, Job: SDE");
    assert_eq!(writes, 2);
}

// ============================================================
// Typestate builder
// ============================================================

#[test]
fn given_typestate_builder_when_all_stages_done_then_builds_person() {
    let person: Person = Person::staged().name("Rafi").job("SDE").into();

    assert_eq!(person.name, "Rafi");
    assert_eq!(person.job, "SDE");
}
