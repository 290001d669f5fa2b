//! WASM bindings for the invoice dashboard.
//!
//! This crate provides WebAssembly bindings for the browser view. Input may
//! be a string or a `Uint8Array` of UTF-8 bytes.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use invdash_core::format::{format_currency, format_rate};
use invdash_core::{Dashboard, Dataset, InputError, LoadPolicy};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Serialize to plain JS objects (records become objects, not `Map`s).
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn dataset_from_js(value: JsValue) -> Result<Dataset, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Load a JS string or byte array into a dashboard, degrading on failure.
fn dashboard_from_js(input: &JsValue, policy: LoadPolicy) -> Dashboard {
    let dashboard = if let Some(text) = input.as_string() {
        Dashboard::from_text(&text, policy)
    } else if input.is_instance_of::<js_sys::Uint8Array>() {
        let bytes = js_sys::Uint8Array::new(input).to_vec();
        Dashboard::from_bytes(&bytes, policy)
    } else {
        Dashboard::degraded(InputError::NotText {
            found: input.js_typeof().as_string().unwrap_or_default(),
        })
    };

    if let Some(e) = dashboard.load_error() {
        web_sys::console::error_2(
            &JsValue::from_str("Error parsing CSV:"),
            &JsValue::from_str(&e.to_string()),
        );
    }

    dashboard
}

/// Load CSV text into a dataset object (`{ headers, records }`).
///
/// Throws on non-text input.
#[wasm_bindgen]
pub fn load_dataset(input: JsValue) -> Result<JsValue, JsValue> {
    let dataset = if let Some(text) = input.as_string() {
        invdash_core::load(&text)
    } else {
        let error = InputError::NotText {
            found: input.js_typeof().as_string().unwrap_or_default(),
        };
        return Err(JsValue::from_str(&error.to_string()));
    };

    to_js(&dataset)
}

/// Compute summary statistics for a dataset object.
#[wasm_bindgen]
pub fn summarize(dataset: JsValue) -> Result<JsValue, JsValue> {
    let dataset = dataset_from_js(dataset)?;
    to_js(&invdash_core::summarize(&dataset))
}

/// Filter a dataset object by a search term.
#[wasm_bindgen]
pub fn search(dataset: JsValue, term: &str) -> Result<JsValue, JsValue> {
    let dataset = dataset_from_js(dataset)?;
    to_js(&invdash_core::search(&dataset, term))
}

/// Format a money amount (e.g., `$1,234.56`).
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency_js(amount: f64, symbol: &str) -> String {
    format_currency(amount, symbol)
}

/// Format an hourly rate (e.g., `$50.00/hr`).
#[wasm_bindgen(js_name = formatRate)]
pub fn format_rate_js(rate: f64, symbol: &str) -> String {
    format_rate(rate, symbol, 2)
}

/// Dashboard state for the browser view.
#[wasm_bindgen]
pub struct InvoiceDashboard {
    inner: Dashboard,
}

#[wasm_bindgen]
impl InvoiceDashboard {
    /// Load a dashboard from CSV text or bytes, leniently.
    #[wasm_bindgen(constructor)]
    pub fn new(input: JsValue) -> Self {
        Self {
            inner: dashboard_from_js(&input, LoadPolicy::Lenient),
        }
    }

    /// Load a dashboard rejecting rows with the wrong number of fields.
    #[wasm_bindgen]
    pub fn strict(input: JsValue) -> Self {
        Self {
            inner: dashboard_from_js(&input, LoadPolicy::Strict),
        }
    }

    /// Load the dataset baked into the build.
    #[wasm_bindgen]
    pub fn embedded() -> Self {
        Self {
            inner: Dashboard::embedded(),
        }
    }

    /// Number of invoices.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Column names in source order.
    #[wasm_bindgen]
    pub fn headers(&self) -> js_sys::Array {
        self.inner
            .dataset()
            .headers()
            .iter()
            .map(|h| JsValue::from_str(h))
            .collect()
    }

    /// All records.
    #[wasm_bindgen]
    pub fn records(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.dataset().records())
    }

    /// Load error message, if loading failed.
    #[wasm_bindgen(js_name = loadError)]
    pub fn load_error(&self) -> Option<String> {
        self.inner.load_error().map(|e| e.to_string())
    }

    /// Summary statistics.
    #[wasm_bindgen]
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.summary())
    }

    /// Records matching a search term.
    #[wasm_bindgen]
    pub fn search(&self, term: &str) -> Result<JsValue, JsValue> {
        to_js(&self.inner.search(term).records())
    }

    /// A single record by exact invoice number, or `undefined`.
    #[wasm_bindgen]
    pub fn select(&self, invoice_number: &str) -> Result<JsValue, JsValue> {
        match self.inner.select(invoice_number) {
            Some(record) => to_js(record),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Highest invoice amount, or `undefined` for an empty dataset.
    #[wasm_bindgen(js_name = maxAmount)]
    pub fn max_amount(&self) -> Option<f64> {
        self.inner.max_amount().ok()
    }

    /// Most hours on one invoice, or `undefined` for an empty dataset.
    #[wasm_bindgen(js_name = maxHours)]
    pub fn max_hours(&self) -> Option<f64> {
        self.inner.max_hours().ok().map(|h| h as f64)
    }

    /// Average invoice amount, or `undefined` for an empty dataset.
    #[wasm_bindgen(js_name = averageInvoiceAmount)]
    pub fn average_invoice_amount(&self) -> Option<f64> {
        self.inner.average_invoice_amount().ok()
    }

    /// Full report (summary, metrics, monthly, terms and company breakdowns).
    #[wasm_bindgen]
    pub fn report(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.report())
    }
}
