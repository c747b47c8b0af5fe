// Adapters layer: concrete implementations of the domain ports (http services, local storage).

pub mod detection;
pub mod http;
pub mod openweathermap;
pub mod storage;
pub mod weather;

pub use detection::DetectionClient;
pub use openweathermap::OpenWeatherMapClient;
pub use storage::FilePreferenceStore;
pub use weather::WeatherClient;
