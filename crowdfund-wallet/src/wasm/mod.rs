//! Browser bindings.
//!
//! The page creates one `CrowdfundApp` on load and calls into it from its
//! event handlers. Errors are thrown as serialized [`Notice`]s so the page
//! can display them directly.

pub mod provider;
pub mod storage;

use std::{cell::RefCell, rc::Rc};

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crowdfund_common::{config::Config, error::FundError};

use crate::app::{App, CampaignForm, Notice};
use crate::provider::WalletProvider;
use provider::EthereumProvider;
use storage::LocalStorage;

type BrowserApp = App<LocalStorage, EthereumProvider>;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}

fn notice_error(err: FundError) -> JsValue {
    if !err.is_user_error() {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }
    to_js(&Notice::from(&err)).unwrap_or_else(|e| e)
}

#[wasm_bindgen]
pub struct CrowdfundApp {
    inner: Rc<RefCell<BrowserApp>>,
}

#[wasm_bindgen]
impl CrowdfundApp {
    /// Restores the session and loads the ledger from `localStorage`.
    ///
    /// `config` is optional; missing fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CrowdfundApp, JsValue> {
        let config: Config = if config.is_undefined() || config.is_null() {
            Config::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {:?}", e)))?
        };
        let store = LocalStorage::from_window().map_err(|e| notice_error(e.into()))?;
        let mut app = App::new(store, EthereumProvider::detect(), config);
        app.init().map_err(notice_error)?;
        Ok(CrowdfundApp { inner: Rc::new(RefCell::new(app)) })
    }

    pub fn header(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.borrow().header())
    }

    pub fn notice_ttl_ms(&self) -> f64 {
        self.inner.borrow().notice_ttl_ms() as f64
    }

    /// Resolves with the success notice, rejects with the error notice.
    pub fn connect_wallet(&self) -> js_sys::Promise {
        let inner = Rc::clone(&self.inner);
        future_to_promise(async move {
            // the provider call is awaited without holding the app borrowed
            let provider = inner.borrow().provider().cloned();
            let response = match provider {
                Some(provider) => Some(provider.request_accounts().await),
                None => None,
            };
            let outcome = inner
                .borrow_mut()
                .complete_connect(response)
                .map_err(notice_error)?;
            to_js(&outcome)
        })
    }

    pub fn create_campaign(&self, form: JsValue) -> Result<JsValue, JsValue> {
        let form: CampaignForm = serde_wasm_bindgen::from_value(form)
            .map_err(|e| JsValue::from_str(&format!("Invalid form: {:?}", e)))?;
        let outcome = self
            .inner
            .borrow_mut()
            .create_campaign(form)
            .map_err(notice_error)?;
        to_js(&outcome)
    }

    pub fn fund_campaign(&self, id: String, amount: String) -> Result<JsValue, JsValue> {
        let outcome = self
            .inner
            .borrow_mut()
            .fund_campaign(&id, &amount)
            .map_err(notice_error)?;
        to_js(&outcome)
    }

    pub fn campaigns(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.borrow().campaign_cards())
    }

    pub fn campaign_details(&self, id: String) -> Result<JsValue, JsValue> {
        let details = self
            .inner
            .borrow()
            .campaign_details(&id)
            .map_err(notice_error)?;
        to_js(&details)
    }

    pub fn profile(&self) -> Result<JsValue, JsValue> {
        let profile = self.inner.borrow().profile().map_err(notice_error)?;
        to_js(&profile)
    }
}
