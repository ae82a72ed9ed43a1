//! Typed field setters shared by [`crate::Event`] and [`crate::Context`].
//!
//! The expanding type must provide `put(self, &str, Value) -> Self`,
//! `is_enabled(&self)`, `stack_enabled(&self)` and `field_names(&self)`.

macro_rules! typed_setters {
    () => {
        /// Add a boolean field.
        #[must_use]
        pub fn bool(self, key: &str, value: bool) -> Self {
            self.put(key, ::serde_json::Value::Bool(value))
        }

        /// Add a duration field, written as fractional milliseconds.
        #[must_use]
        pub fn dur(self, key: &str, value: ::std::time::Duration) -> Self {
            self.put(key, crate::fields::duration_value(value))
        }

        /// Add a floating point field. Non-finite values are written as `null`.
        #[must_use]
        pub fn float64(self, key: &str, value: f64) -> Self {
            self.put(key, ::serde_json::Value::from(value))
        }

        /// Add a signed integer field.
        #[must_use]
        pub fn int64(self, key: &str, value: i64) -> Self {
            self.put(key, ::serde_json::Value::from(value))
        }

        /// Add an unsigned integer field.
        #[must_use]
        pub fn uint64(self, key: &str, value: u64) -> Self {
            self.put(key, ::serde_json::Value::from(value))
        }

        /// Add a string field.
        #[must_use]
        pub fn str(self, key: &str, value: &str) -> Self {
            self.put(key, ::serde_json::Value::String(value.to_string()))
        }

        /// Add a timestamp field, written as RFC 3339.
        #[must_use]
        pub fn time(self, key: &str, value: &::chrono::DateTime<::chrono::Utc>) -> Self {
            self.put(key, crate::fields::time_value(value))
        }

        /// Add a field holding the `Display` rendering of `value`.
        #[must_use]
        pub fn stringer(self, key: &str, value: &dyn ::std::fmt::Display) -> Self {
            if !self.is_enabled() {
                return self;
            }
            self.put(key, ::serde_json::Value::String(value.to_string()))
        }

        /// Add `error` under the configured error field name.
        ///
        /// With stack output enabled the error's cause chain is written under
        /// the configured stack field name as well.
        #[must_use]
        pub fn err(self, error: &(dyn ::std::error::Error + 'static)) -> Self {
            if !self.is_enabled() {
                return self;
            }
            let names = ::std::sync::Arc::clone(self.field_names());
            let stack = self.stack_enabled();
            let this = self.put(&names.error, ::serde_json::Value::String(error.to_string()));
            if stack {
                this.put(&names.stack, crate::fields::cause_chain(error))
            } else {
                this
            }
        }

        /// Add an array of errors under `key`.
        ///
        /// Entries are bare messages, or `{"message", "causes"}` objects when
        /// stack output is enabled.
        #[must_use]
        pub fn errs<E>(self, key: &str, errors: &[E]) -> Self
        where
            E: AsRef<dyn ::std::error::Error + Send + Sync>,
        {
            if !self.is_enabled() {
                return self;
            }
            let stack = self.stack_enabled();
            let entries = errors
                .iter()
                .map(|error| crate::fields::error_entry(error.as_ref(), stack))
                .collect();
            self.put(key, ::serde_json::Value::Array(entries))
        }
    };
}

pub(crate) use typed_setters;
