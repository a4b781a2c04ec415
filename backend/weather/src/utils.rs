use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Description {
    Freezing,
    Cold,
    Mild,
    Warm,
    Hot,
}

impl Description {
    pub fn as_str(&self) -> &'static str {
        match self {
            Description::Freezing => "freezing",
            Description::Cold => "cold",
            Description::Mild => "mild",
            Description::Warm => "warm",
            Description::Hot => "hot",
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rounded to one decimal place, half to even on the exact binary value.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    let fahrenheit = celsius * 9.0 / 5.0 + 32.0;
    format!("{fahrenheit:.1}").parse().unwrap_or(fahrenheit)
}

pub fn describe(temp: f64) -> Description {
    if temp < 0.0 {
        Description::Freezing
    } else if temp < 10.0 {
        Description::Cold
    } else if temp < 20.0 {
        Description::Mild
    } else if temp < 30.0 {
        Description::Warm
    } else {
        Description::Hot
    }
}
