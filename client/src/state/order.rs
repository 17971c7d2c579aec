//! Order dialog state machine.
//!
//! DESIGN
//! ======
//! Two states only: `Closed`, or `Open` bound to one record with its draft
//! form. Opening always starts from a default form, so nothing typed into a
//! cancelled or submitted dialog survives into the next one.

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;

use fleet::format::format_rubles;
use fleet::{EquipmentRecord, OrderError, OrderField, OrderForm, OrderRequest, Quote};

/// Shown when required order fields are blank.
pub const MISSING_FIELDS_NOTICE: &str = "Заполните все поля формы";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum OrderDialog {
    #[default]
    Closed,
    Open { equipment: EquipmentRecord, form: OrderForm },
}

/// Outcome of a successful submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub equipment_name: String,
    pub request: OrderRequest,
    pub total: u64,
}

impl Confirmation {
    /// Success notification text.
    pub fn message(&self) -> String {
        format!("Заказ на {} оформлен!", self.equipment_name)
    }
}

impl OrderDialog {
    /// Open for `equipment` with a fresh form, replacing any open session.
    pub fn open(&mut self, equipment: EquipmentRecord) {
        *self = Self::Open { equipment, form: OrderForm::default() };
    }

    /// Close without validation, dropping the draft.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn equipment(&self) -> Option<&EquipmentRecord> {
        match self {
            Self::Open { equipment, .. } => Some(equipment),
            Self::Closed => None,
        }
    }

    pub fn form(&self) -> Option<&OrderForm> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    /// Current value of `field`, or empty when closed.
    pub fn field(&self, field: OrderField) -> String {
        self.form().map(|f| f.get(field).to_owned()).unwrap_or_default()
    }

    /// Update one field of the draft. Ignored when closed.
    pub fn edit(&mut self, field: OrderField, value: impl Into<String>) {
        if let Self::Open { form, .. } = self {
            form.set(field, value);
        }
    }

    /// Live price breakdown for the open dialog.
    pub fn quote(&self) -> Option<Quote> {
        match self {
            Self::Open { equipment, form } => Some(Quote::for_record(equipment, form)),
            Self::Closed => None,
        }
    }

    /// Validate and confirm the order.
    ///
    /// On success the dialog closes. On failure it stays open with the draft
    /// untouched so the renter can fix the fields.
    ///
    /// # Errors
    ///
    /// [`OrderError::NoSelection`] when closed, [`OrderError::MissingFields`]
    /// when a required field is blank.
    pub fn submit(&mut self) -> Result<Confirmation, OrderError> {
        let Self::Open { equipment, form } = self else {
            return Err(OrderError::NoSelection);
        };
        let request = form.validate()?;
        let confirmation = Confirmation {
            equipment_name: equipment.name.clone(),
            total: form.total(equipment.price),
            request,
        };
        *self = Self::Closed;
        Ok(confirmation)
    }
}

/// User-facing text for an order error.
pub fn error_notice(err: &OrderError) -> String {
    match err {
        OrderError::MissingFields(_) => MISSING_FIELDS_NOTICE.to_owned(),
        OrderError::Unavailable(name) => format!("{name} сейчас занят"),
        OrderError::UnknownEquipment(_) => "Техника не найдена".to_owned(),
        OrderError::NoSelection => "Выберите технику для заказа".to_owned(),
    }
}

/// Keys that cancel an open dialog.
pub fn is_cancel_key(key: &str) -> bool {
    key == "Escape"
}

/// Summary row value, e.g. `36 000 ₽`.
pub fn total_label(quote: Option<Quote>) -> String {
    format_rubles(quote.map_or(0, |q| q.total))
}
