use std::fmt;

use serde::{Deserialize, Serialize};

/// A single attendee registration.
///
/// Identity is the composite key (`email`, `category`): `email` is the
/// partition component and `category` the sort component. `name` and
/// `surname` are descriptive only.
///
/// Field names on the wire are `Name`, `Surname`, `email` and `category`.
/// Missing fields deserialize as empty strings so validation can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Surname", default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub category: String,
}

impl Booking {
    /// Creates a new booking.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            category: category.into(),
        }
    }

    /// Returns the composite key of this booking.
    pub fn key(&self) -> BookingKey {
        BookingKey::new(&self.email, &self.category)
    }
}

/// Composite key of a booking: (partition component, sort component).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingKey {
    pub email: String,
    pub category: String,
}

impl BookingKey {
    pub fn new(email: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for BookingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.email, self.category)
    }
}
