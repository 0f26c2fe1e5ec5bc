//! Newtype IDs for type-safe cart and catalog references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing product identifiers with variant discriminators.

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use docushop_core::define_id;
/// define_id!(SkuId);
/// define_id!(WarehouseId);
///
/// let sku = SkuId::new("sku-1");
/// let warehouse = WarehouseId::new("sku-1");
///
/// // These are different types, so this won't compile:
/// // let _: SkuId = warehouse;
/// # let _ = (sku, warehouse);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(VariantKey);

impl ProductId {
    /// Derive a product ID from a display name.
    ///
    /// Used when a product card carries no explicit identifier.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }
}

impl VariantKey {
    /// Discriminator used when a product has no variant axis.
    pub const DEFAULT: &'static str = "default";

    /// The `"default"` variant.
    #[must_use]
    pub fn default_variant() -> Self {
        Self(Self::DEFAULT.to_owned())
    }

    /// Returns `true` for the `"default"` variant.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }

    /// Label shown next to a line item, `None` for the default variant.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        if self.is_default() || self.0.is_empty() {
            None
        } else {
            Some(&self.0)
        }
    }
}

impl Default for VariantKey {
    fn default() -> Self {
        Self::default_variant()
    }
}

/// Lower-case a label and collapse whitespace runs into `-`.
///
/// Blank input becomes `"item"`.
///
/// ```rust
/// # use docushop_core::slugify;
/// assert_eq!(slugify("Travel  Wallet"), "travel-wallet");
/// assert_eq!(slugify("   "), "item");
/// ```
#[must_use]
pub fn slugify(label: &str) -> String {
    let words: Vec<String> = label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        "item".to_owned()
    } else {
        words.join("-")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_from_name() {
        assert_eq!(ProductId::from_name("Leather Notebook").as_str(), "leather-notebook");
        assert_eq!(ProductId::from_name("").as_str(), "item");
    }

    #[test]
    fn test_variant_label_hides_default() {
        assert_eq!(VariantKey::default().label(), None);
        assert_eq!(VariantKey::new("").label(), None);
        assert_eq!(VariantKey::new("Canada").label(), Some("Canada"));
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id = ProductId::new("notebook");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"notebook\"");

        let parsed: VariantKey = serde_json::from_str("\"default\"").unwrap();
        assert!(parsed.is_default());
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("  Gift   Card\tSet "), "gift-card-set");
    }
}
