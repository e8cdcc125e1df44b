use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::io;
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub name: String,
    pub contact: String,
}

impl Admin {
    pub fn add_parking_lot(&self, lot: &Lot) -> String {
        format!("Parking lot added: {}", lot.location)
    }
}

impl fmt::Display for Admin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.contact)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub id: u32,
    pub location: String,
    pub capacity: NonZeroUsize,
    #[serde(default)]
    pub admin: Option<Admin>,
}

impl Default for Lot {
    fn default() -> Self {
        Lot {
            id: 1,
            location: "Downtown".to_string(),
            capacity: Self::DEFAULT_CAPACITY,
            admin: None,
        }
    }
}

impl Lot {
    const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(10).unwrap();

    pub fn load_from_file(path: &Path) -> io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> io::Result<Self> {
        let lot: Lot = serde_json::from_str(data)?;
        Ok(lot)
    }
}

impl fmt::Display for Lot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({} slots)", self.id, self.location, self.capacity)
    }
}
