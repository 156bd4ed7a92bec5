/// Server configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Location of the portfolio ledger CSV: an `http(s)://` URL or a local
    /// file path. Both ledgers are read through the same kind of source.
    pub portfolio_ledger: String,
    /// Location of the trade ledger CSV.
    pub trade_ledger: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("MF_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            portfolio_ledger: std::env::var("MF_PORTFOLIO_LEDGER")
                .unwrap_or_else(|_| "data/portfolio_update.csv".to_string()),
            trade_ledger: std::env::var("MF_TRADE_LEDGER")
                .unwrap_or_else(|_| "data/trade_log.csv".to_string()),
        }
    }
}
