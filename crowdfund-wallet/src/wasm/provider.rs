use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::provider::{ProviderError, WalletProvider};

/// EIP-1193 provider injected by a wallet extension as `window.ethereum`.
#[derive(Debug, Clone)]
pub struct EthereumProvider {
    ethereum: JsValue,
}

impl EthereumProvider {
    /// Returns the injected provider, `None` when no extension is installed.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(window.as_ref(), &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        Some(Self { ethereum })
    }
}

fn describe(value: &JsValue) -> String {
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[async_trait(?Send)]
impl WalletProvider for EthereumProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let request: Function = Reflect::get(&self.ethereum, &JsValue::from_str("request"))
            .ok()
            .and_then(|f| f.dyn_into().ok())
            .ok_or_else(|| ProviderError::InvalidResponse("provider has no request()".to_string()))?;

        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str("eth_requestAccounts"))
            .map_err(|e| ProviderError::InvalidResponse(describe(&e)))?;

        let promise: Promise = request
            .call1(&self.ethereum, &args)
            .map_err(|e| ProviderError::Rejected(describe(&e)))?
            .dyn_into()
            .map_err(|v| ProviderError::InvalidResponse(describe(&v)))?;

        let value = JsFuture::from(promise)
            .await
            .map_err(|e| ProviderError::Rejected(describe(&e)))?;

        let accounts: Array = value
            .dyn_into()
            .map_err(|v| ProviderError::InvalidResponse(describe(&v)))?;

        Ok(accounts.iter().filter_map(|a| a.as_string()).collect())
    }
}
