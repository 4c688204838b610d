//! Trip documents as the surrounding application stores them.
//!
//! These types mirror the JSON trip record (camelCase keys). Fields the
//! settlement pipeline does not read (flight info, shopping and packing lists,
//! activity times) are ignored on deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A full trip snapshot: the itinerary plus the expenses not tied to it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripData {
    #[serde(default)]
    pub days: Vec<Day>,
    #[serde(default)]
    pub independent_expenses: Vec<ExpenseRecord>,
}

impl TripData {
    /// Looks up a day by its itinerary index.
    pub fn day(&self, index: u32) -> Option<&Day> {
        self.days.iter().find(|day| day.index == index)
    }
}

/// One itinerary day. Activities are kept in itinerary order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub index: u32,
    pub date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// An itinerary activity owning the expenses logged against it.
///
/// Seeded activities only carry a `description`; edited ones also get a
/// `name`, which takes precedence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

impl Activity {
    /// The label shown for the activity: `name`, else `description`.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or_default()
    }
}

/// An expense as stored, before validation.
///
/// `amount` and `currency` are optional because older or hand-edited records
/// may miss them; such records are skipped by the aggregator. `date` is only
/// read for independent expenses, activity expenses take their day's date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub payer: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}
