use crate::square::Square;
use crate::status::TourStatus;
use crate::topology::MAX_SIZE;
use crate::tour::VisitOrder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{},{}", self.row, self.col))
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid square format: {}", s)))?;

        let row: u8 = row
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid row: {}", e)))?;
        let col: u8 = col
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid column: {}", e)))?;

        Ok(Square::new(row, col))
    }
}

impl Serialize for TourStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TourStatus::Complete => serializer.serialize_str("complete"),
            TourStatus::DeadEnd => serializer.serialize_str("dead_end"),
        }
    }
}

impl<'de> Deserialize<'de> for TourStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "complete" => Ok(TourStatus::Complete),
            "dead_end" => Ok(TourStatus::DeadEnd),
            other => Err(serde::de::Error::custom(format!(
                "Invalid tour status: {}",
                other
            ))),
        }
    }
}

impl Serialize for VisitOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VisitOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<u8>>::deserialize(deserializer)?;

        if rows.is_empty() || rows.len() > MAX_SIZE {
            return Err(serde::de::Error::custom(format!(
                "Invalid board size: {} (expected 1..={})",
                rows.len(),
                MAX_SIZE
            )));
        }

        let order = VisitOrder::from_rows(&rows)
            .ok_or_else(|| serde::de::Error::custom("Visit order rows must form a square"))?;

        let area = order.size() * order.size();
        if let Some(step) = rows.iter().flatten().find(|&&step| step as usize > area) {
            return Err(serde::de::Error::custom(format!(
                "Step {} exceeds board area {}",
                step, area
            )));
        }

        if !order.is_knights_tour() {
            return Err(serde::de::Error::custom(
                "Visit order is not a knight's tour of the board",
            ));
        }

        Ok(order)
    }
}
