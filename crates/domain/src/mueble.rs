//! Mueble — a furniture record in the catalogue.

use serde::{Deserialize, Serialize};

use crate::error::{MueblesError, ValidationError};
use crate::id::Code;

/// A persisted furniture record.
///
/// The `code` is assigned once, when the record is created, and is never
/// touched by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mueble {
    #[serde(rename = "codigo")]
    pub code: Code,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl Mueble {
    /// Assemble a record from a freshly generated code and validated fields.
    #[must_use]
    pub fn new(code: Code, fields: MuebleFields) -> Self {
        Self {
            code,
            name: fields.name,
            price: fields.price,
            category: fields.category,
        }
    }

    /// Replace the mutable fields, keeping the code.
    #[must_use]
    pub fn with_fields(self, fields: MuebleFields) -> Self {
        Self::new(self.code, fields)
    }
}

/// The client-supplied part of a record: everything but the code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuebleFields {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl MuebleFields {
    /// Create a builder for constructing [`MuebleFields`].
    #[must_use]
    pub fn builder() -> MuebleFieldsBuilder {
        MuebleFieldsBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// A zero price counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::Validation`] when a field is blank, the price
    /// is zero, or the price is not finite.
    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<(), MueblesError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName.into());
        }
        if !self.price.is_finite() {
            return Err(ValidationError::InvalidPrice(self.price.to_string()).into());
        }
        if self.price == 0.0 {
            return Err(ValidationError::MissingPrice.into());
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingCategory.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`MuebleFields`].
#[derive(Debug, Default)]
pub struct MuebleFieldsBuilder {
    name: Option<String>,
    price: Option<f64>,
    category: Option<String>,
}

impl MuebleFieldsBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Consume the builder, validate, and return [`MuebleFields`].
    ///
    /// # Errors
    ///
    /// Returns [`MueblesError::Validation`] if any field is missing or invalid.
    pub fn build(self) -> Result<MuebleFields, MueblesError> {
        let fields = MuebleFields {
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
        };
        fields.validate()?;
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silla() -> MuebleFields {
        MuebleFields::builder()
            .name("Silla")
            .price(100.0)
            .category("Sillas")
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_fields_when_all_provided() {
        let fields = silla();
        assert_eq!(fields.name, "Silla");
        assert!((fields.price - 100.0).abs() < f64::EPSILON);
        assert_eq!(fields.category, "Sillas");
    }

    #[test]
    fn should_return_validation_error_when_name_missing() {
        let result = MuebleFields::builder()
            .price(10.0)
            .category("Mesas")
            .build();
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::MissingName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_price_missing() {
        let result = MuebleFields::builder()
            .name("Mesa")
            .category("Mesas")
            .build();
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::MissingPrice))
        ));
    }

    #[test]
    fn should_treat_zero_price_as_missing() {
        let result = MuebleFields::builder()
            .name("Mesa")
            .price(0.0)
            .category("Mesas")
            .build();
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::MissingPrice))
        ));
    }

    #[test]
    fn should_accept_tiny_non_zero_price() {
        let fields = MuebleFields::builder()
            .name("Tornillo")
            .price(1e-17)
            .category("Herrajes")
            .build()
            .unwrap();
        assert!(fields.price > 0.0);
    }

    #[test]
    fn should_reject_non_finite_price() {
        let result = MuebleFields::builder()
            .name("Mesa")
            .price(f64::NAN)
            .category("Mesas")
            .build();
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::InvalidPrice(_)))
        ));
    }

    #[test]
    fn should_return_validation_error_when_category_blank() {
        let result = MuebleFields::builder()
            .name("Mesa")
            .price(10.0)
            .category("   ")
            .build();
        assert!(matches!(
            result,
            Err(MueblesError::Validation(ValidationError::MissingCategory))
        ));
    }

    #[test]
    fn should_keep_code_when_replacing_fields() {
        let mueble = Mueble::new(Code::new(7), silla());
        let updated = mueble.with_fields(
            MuebleFields::builder()
                .name("Silla Roja")
                .price(120.0)
                .category("Sillas")
                .build()
                .unwrap(),
        );

        assert_eq!(updated.code, Code::new(7));
        assert_eq!(updated.name, "Silla Roja");
        assert!((updated.price - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_serialize_with_spanish_field_names() {
        let mueble = Mueble::new(Code::new(1), silla());
        let json = serde_json::to_value(&mueble).unwrap();
        assert_eq!(json["codigo"], 1);
        assert_eq!(json["nombre"], "Silla");
        assert_eq!(json["precio"], 100.0);
        assert_eq!(json["categoria"], "Sillas");
    }
}
