//! JSON encoding of contact lists.
//!
//! The on-disk layout is an array of
//! `{"fullName":{"name":..,"surName":..},"phoneNumber":..,"email":..,"birthday":"dd.MM.yyyy","address":..}`
//! objects. Birthdays use the `dd.MM.yyyy` pattern rather than ISO dates.

use crate::domain::model::{Contact, FullName};
use crate::utils::error::{ContactError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DATE_PATTERN: &str = "dd.MM.yyyy";
const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FullNameRecord {
    name: String,
    sur_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactRecord {
    full_name: FullNameRecord,
    phone_number: String,
    email: String,
    birthday: String,
    address: String,
}

impl ContactRecord {
    fn from_contact(contact: &Contact) -> Result<Self> {
        Ok(Self {
            full_name: FullNameRecord {
                name: contact.full_name().name().to_string(),
                sur_name: contact.full_name().sur_name().to_string(),
            },
            phone_number: contact.phone_number().to_string(),
            email: contact.email().to_string(),
            birthday: encode_date(contact.birthday())?,
            address: contact.address().to_string(),
        })
    }

    fn into_contact(self) -> Result<Contact> {
        let birthday = parse_date(&self.birthday)?;
        Ok(Contact::new(
            FullName::new(self.full_name.name, self.full_name.sur_name),
            self.phone_number,
            self.email,
            birthday,
            self.address,
        ))
    }
}

pub fn encode(contacts: &[Contact]) -> Result<String> {
    let records = contacts
        .iter()
        .map(ContactRecord::from_contact)
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string(&records)?)
}

pub fn decode(text: &str) -> Result<Vec<Contact>> {
    let records: Vec<ContactRecord> = serde_json::from_str(text)?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record.into_contact().map_err(|e| match e {
                ContactError::InvalidDateError { value, reason } => ContactError::InvalidDateError {
                    value,
                    reason: format!("contact #{}: {}", index, reason),
                },
                other => other,
            })
        })
        .collect()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Like [`format_date`], but refuses years the pattern cannot read back.
fn encode_date(date: NaiveDate) -> Result<String> {
    if !(0..=9999).contains(&date.year()) {
        return Err(ContactError::InvalidDateError {
            value: date.to_string(),
            reason: format!("year must fit {}", DATE_PATTERN),
        });
    }
    Ok(format_date(date))
}

/// Parses a `dd.MM.yyyy` date. Day and month must be two digits, the year four.
///
/// A day past the end of its month is moved back to the month's last day
/// (`31.04.1990` is 30 April 1990); days outside 1..=31 and months outside
/// 1..=12 are rejected.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let invalid = |reason: String| ContactError::InvalidDateError {
        value: value.to_string(),
        reason,
    };

    if !has_date_shape(value) {
        return Err(invalid(format!("expected {}", DATE_PATTERN)));
    }

    let number = |range: std::ops::Range<usize>| -> u32 {
        value[range].bytes().fold(0, |n, b| n * 10 + u32::from(b - b'0'))
    };
    let (day, month, year) = (number(0..2), number(3..5), number(6..10));

    if !(1..=12).contains(&month) {
        return Err(invalid(format!("month {} is out of range", month)));
    }
    if !(1..=31).contains(&day) {
        return Err(invalid(format!("day {} is out of range", day)));
    }

    // The year has four digits, so it always fits an i32.
    let year = year as i32;
    (day.min(28)..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .ok_or_else(|| invalid("no such date".to_string()))
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}
