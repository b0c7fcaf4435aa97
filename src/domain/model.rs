use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    name: String,
    sur_name: String,
}

impl FullName {
    pub fn new(name: impl Into<String>, sur_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sur_name: sur_name.into(),
        }
    }

    /// Given name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sur_name(&self) -> &str {
        &self.sur_name
    }
}

/// One person's contact record. Values are immutable: editing a contact means
/// replacing it with a new `Contact`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    full_name: FullName,
    phone_number: String,
    email: String,
    birthday: NaiveDate,
    address: String,
}

impl Contact {
    pub fn new(
        full_name: FullName,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        birthday: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            full_name,
            phone_number: phone_number.into(),
            email: email.into(),
            birthday,
            address: address.into(),
        }
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}
