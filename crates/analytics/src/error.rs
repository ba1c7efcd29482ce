use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Required option is missing: {0}")]
    MissingDependency(String),

    #[error("Purchase record references unknown seller '{0}'")]
    UnknownSeller(String),

    #[error("Line item of seller '{seller_id}' references unknown product '{sku}'")]
    UnknownProduct { sku: String, seller_id: String },

    #[error("Money arithmetic overflowed while aggregating seller '{seller_id}'")]
    Overflow { seller_id: String },
}
