pub mod dmr;
pub mod quantile;
