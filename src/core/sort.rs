use crate::domain::model::Contact;
use std::cmp::Ordering;
use std::fmt;

/// Field a contact list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Surname,
    PhoneNumber,
    Email,
    Birthday,
    Address,
}

impl SortKey {
    /// Menu order used by the shell.
    pub const ALL: [SortKey; 6] = [
        SortKey::Name,
        SortKey::Surname,
        SortKey::PhoneNumber,
        SortKey::Email,
        SortKey::Birthday,
        SortKey::Address,
    ];

    /// Text fields compare case-insensitively, birthdays chronologically.
    pub fn compare(self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            SortKey::Name => cmp_ignore_case(a.full_name().name(), b.full_name().name()),
            SortKey::Surname => {
                cmp_ignore_case(a.full_name().sur_name(), b.full_name().sur_name())
            }
            SortKey::PhoneNumber => cmp_ignore_case(a.phone_number(), b.phone_number()),
            SortKey::Email => cmp_ignore_case(a.email(), b.email()),
            SortKey::Birthday => a.birthday().cmp(&b.birthday()),
            SortKey::Address => cmp_ignore_case(a.address(), b.address()),
        }
    }

    /// Maps a 1-based menu number to a key.
    pub fn from_menu_choice(choice: &str) -> Option<SortKey> {
        let index: usize = choice.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| SortKey::ALL.get(i).copied())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Name => "Name",
            SortKey::Surname => "Surname",
            SortKey::PhoneNumber => "Phone number",
            SortKey::Email => "Email",
            SortKey::Birthday => "Birthday",
            SortKey::Address => "Address",
        };
        f.write_str(label)
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FullName;
    use chrono::NaiveDate;

    fn contact(name: &str, sur_name: &str, year: i32) -> Contact {
        Contact::new(
            FullName::new(name, sur_name),
            "",
            "",
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            "",
        )
    }

    #[test]
    fn test_compare_ignores_case() {
        let a = contact("alice", "smith", 2000);
        let b = contact("Bob", "Smith", 1990);
        assert_eq!(SortKey::Name.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::Surname.compare(&a, &b), Ordering::Equal);
        assert_eq!(SortKey::Birthday.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_from_menu_choice() {
        assert_eq!(SortKey::from_menu_choice("1"), Some(SortKey::Name));
        assert_eq!(SortKey::from_menu_choice(" 5 "), Some(SortKey::Birthday));
        assert_eq!(SortKey::from_menu_choice("6"), Some(SortKey::Address));
        assert_eq!(SortKey::from_menu_choice("0"), None);
        assert_eq!(SortKey::from_menu_choice("7"), None);
        assert_eq!(SortKey::from_menu_choice("name"), None);
    }
}
