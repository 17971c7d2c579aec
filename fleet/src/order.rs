//! Rental order form: field model, duration parsing, pricing and validation.
//!
//! DESIGN
//! ======
//! The form stores raw text exactly as typed. Interpretation happens at read
//! time: `shifts()` degrades anything unusable to one shift, and `validate()`
//! is the single gate between an editable draft and an `OrderRequest`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{EquipmentId, EquipmentRecord};

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

/// Shift count used whenever the duration field cannot be read as a positive integer.
pub const DEFAULT_SHIFTS: u32 = 1;

/// Error returned when an order cannot be placed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<OrderField>),
    #[error("equipment is not available for rent: {0}")]
    Unavailable(String),
    #[error("no equipment with id {0}")]
    UnknownEquipment(EquipmentId),
    #[error("no equipment selected")]
    NoSelection,
}

fn join_fields(fields: &[OrderField]) -> String {
    fields.iter().copied().map(OrderField::as_str).collect::<Vec<_>>().join(", ")
}

/// Editable fields of the order form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    RenterName,
    Phone,
    StartDate,
    Duration,
}

impl OrderField {
    /// Fields that must be non-empty before an order is accepted.
    pub const REQUIRED: [OrderField; 3] = [Self::RenterName, Self::Phone, Self::StartDate];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RenterName => "renter_name",
            Self::Phone => "phone",
            Self::StartDate => "start_date",
            Self::Duration => "duration",
        }
    }

    /// Form label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RenterName => "Ваше имя",
            Self::Phone => "Телефон",
            Self::StartDate => "Дата начала аренды",
            Self::Duration => "Количество смен",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draft order, one per open dialog. Values are kept as typed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub renter_name: String,
    pub phone: String,
    pub start_date: String,
    pub duration: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            renter_name: String::new(),
            phone: String::new(),
            start_date: String::new(),
            duration: DEFAULT_SHIFTS.to_string(),
        }
    }
}

impl OrderForm {
    #[must_use]
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::RenterName => &self.renter_name,
            OrderField::Phone => &self.phone,
            OrderField::StartDate => &self.start_date,
            OrderField::Duration => &self.duration,
        }
    }

    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        let value = value.into();
        match field {
            OrderField::RenterName => self.renter_name = value,
            OrderField::Phone => self.phone = value,
            OrderField::StartDate => self.start_date = value,
            OrderField::Duration => self.duration = value,
        }
    }

    /// Number of shifts the duration field currently denotes.
    #[must_use]
    pub fn shifts(&self) -> u32 {
        parse_shifts(&self.duration)
    }

    /// Total price for `price_per_shift` over the current duration.
    #[must_use]
    pub fn total(&self, price_per_shift: u64) -> u64 {
        price_per_shift.saturating_mul(u64::from(self.shifts()))
    }

    /// Required fields that are blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<OrderField> {
        OrderField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Turn the draft into a request if every required field is filled.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::MissingFields`] listing each blank required field.
    pub fn validate(&self) -> Result<OrderRequest, OrderError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(OrderError::MissingFields(missing));
        }
        Ok(OrderRequest {
            renter_name: self.renter_name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            start_date: self.start_date.trim().to_owned(),
            shifts: self.shifts(),
        })
    }
}

/// A validated order, ready to be confirmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub renter_name: String,
    pub phone: String,
    pub start_date: String,
    pub shifts: u32,
}

/// Price breakdown shown in the dialog summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub price_per_shift: u64,
    pub shifts: u32,
    pub total: u64,
}

impl Quote {
    #[must_use]
    pub fn for_record(record: &EquipmentRecord, form: &OrderForm) -> Self {
        Self { price_per_shift: record.price, shifts: form.shifts(), total: form.total(record.price) }
    }
}

/// Read a shift count from free text.
///
/// Leading whitespace is skipped and the longest run of leading digits is
/// used (`"3.5"` reads as 3). Empty, zero, negative, overflowing or
/// non-numeric input yields [`DEFAULT_SHIFTS`].
#[must_use]
pub fn parse_shifts(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('-') {
        return DEFAULT_SHIFTS;
    }
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    match digits[..end].parse::<u32>() {
        Ok(0) | Err(_) => DEFAULT_SHIFTS,
        Ok(n) => n,
    }
}
