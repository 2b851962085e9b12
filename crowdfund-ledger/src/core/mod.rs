pub mod campaign;
pub mod ledger;
