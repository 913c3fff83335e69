pub mod daily_aggregate;
pub mod forecast_entry;
pub mod location;
pub mod sample;
pub mod units;
pub mod weather_condition;
