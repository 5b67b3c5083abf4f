use crate::transaction::Operation;
use csv::ReaderBuilder;
use std::io::Read;
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer};

pub struct Parser {}

impl Parser {
    pub fn parse(file_path: &str) -> Result<Vec<Operation>, csv::Error> {
        let rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(file_path)?;
        Ok(Self::collect(rdr))
    }

    pub fn parse_reader<R: Read>(reader: R) -> Vec<Operation> {
        let rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::collect(rdr)
    }

    fn collect<R: Read>(mut rdr: csv::Reader<R>) -> Vec<Operation> {
        let mut result = Vec::new();
        for (line, r) in rdr.deserialize::<Operation>().enumerate() {
            match r {
                Err(err) => log::warn!("skipping operation {}: {}", line + 1, err),
                Ok(op) if !op.amount().is_finite() => {
                    log::warn!("skipping operation {}: amount is not finite", line + 1)
                }
                Ok(op) => result.push(op),
            }
        }
        result
    }
}

pub fn arbitrary_tx_amount<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + FromStr + Deserialize<'de>,
    <T as FromStr>::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount<T> {
        Number(T),
        String(String),
    }

    match Amount::<T>::deserialize(deserializer)? {
        Amount::String(s) if s.is_empty() => Ok(T::default()),
        Amount::Number(i) => Ok(i),
        Amount::String(s) => s.parse::<T>().map_err(serde::de::Error::custom),
    }
}
