use std::{fmt, ops::Deref};

use non_empty_string::NonEmptyString;
use serde::{Serialize, Serializer};

use crate::domain::PersonId;

/// A person's name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(NonEmptyString);

impl Name {
    /// Creates a new `Name` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyNameError`] if the string is empty.
    pub fn new(s: String) -> Result<Self, EmptyNameError> {
        NonEmptyString::new(s).map(Self).map_err(|_| EmptyNameError)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for Name {
    type Error = EmptyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Name {
    type Error = EmptyNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Error returned when a person is given an empty name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("a person's name must not be empty")]
pub struct EmptyNameError;

/// The identity record shared by every role in the hospital.
///
/// A `Person` is never registered on its own. Patients, doctors and nurses
/// each compose one and extend its rendering with their own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: PersonId,
    name: Name,
    address: String,
    phone: String,
}

impl Person {
    /// Construct a person from pre-validated parts.
    #[must_use]
    pub const fn new(id: PersonId, name: Name, address: String, phone: String) -> Self {
        Self {
            id,
            name,
            address,
            phone,
        }
    }

    /// Construct a person, validating the name.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyNameError`] if `name` is empty.
    pub fn try_new(
        id: u32,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, EmptyNameError> {
        Ok(Self::new(
            PersonId::new(id),
            Name::new(name.into())?,
            address.into(),
            phone.into(),
        ))
    }

    /// The person's ID.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.id
    }

    /// The person's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// The person's postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The person's phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Phone: {}", self.phone)
    }
}

/// Something with a renderable identity record.
///
/// Implementors render the base [`Person`] block first, followed by any
/// role-specific fields.
pub trait Identity: fmt::Display {
    /// The underlying identity record.
    fn person(&self) -> &Person;

    /// The ID of this person.
    fn id(&self) -> PersonId {
        self.person().id()
    }

    /// The name of this person.
    fn name(&self) -> &Name {
        self.person().name()
    }

    /// A human-readable rendering of every field.
    fn details(&self) -> String {
        self.to_string()
    }
}

impl Identity for Person {
    fn person(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let error = Person::try_new(1, "", "123 Elm St", "555-1234").unwrap_err();
        assert_eq!(error, EmptyNameError);
    }

    #[test]
    fn details_render_all_four_fields() {
        let person = Person::try_new(1, "John Doe", "123 Elm St", "555-1234").unwrap();

        assert_eq!(
            person.details(),
            "ID: 1\nName: John Doe\nAddress: 123 Elm St\nPhone: 555-1234\n"
        );
        assert_eq!(person.id(), PersonId::new(1));
    }

    #[test]
    fn address_and_phone_may_be_empty() {
        let person = Person::try_new(9, "Jane Roe", "", "").unwrap();
        assert_eq!(person.address(), "");
        assert_eq!(person.phone(), "");
    }
}
