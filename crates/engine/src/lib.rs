//! Expense settlement for shared trips.
//!
//! The engine turns a trip snapshot (itinerary days → activities → expenses,
//! plus independent expenses) and the trip settings into:
//!
//! - the flat, date-ordered list of every expense,
//! - the total spent per currency,
//! - a [`SettlementReport`]: per configured currency, the total, the equal
//!   share of each family member and the transfers that even everyone out.
//!
//! Every call recomputes from scratch; the engine keeps no state besides its
//! validated configuration.
//!
//! ```rust
//! use engine::{Engine, Settings, TripData};
//!
//! let settings: Settings = serde_json::from_str(
//!     r#"{"familyMembers": ["A", "B"], "currencies": [{"code": "EUR", "name": "Euro"}]}"#,
//! )
//! .unwrap();
//! let trip: TripData = serde_json::from_str(
//!     r#"{"independentExpenses": [
//!         {"id": "e1", "amount": 100, "currency": "EUR", "payer": "A", "date": "2026-04-01"}
//!     ]}"#,
//! )
//! .unwrap();
//!
//! let engine = Engine::builder().settings(settings).build().unwrap();
//! let report = engine.settle(&trip).unwrap();
//! let eur = report.get("EUR").unwrap();
//! assert_eq!(eur.per_person, 50.0);
//! assert_eq!(eur.transactions[0].from, "B");
//! ```

use serde::Serialize;

pub use aggregate::{Aggregation, aggregate, day_expenses};
pub use balances::{CurrencyBalances, MemberBalance, compute_balances};
pub use currency::{CurrencyCode, CurrencyConfig};
pub use error::EngineError;
pub use expense::{Expense, ExpenseSource, SkipReason, SkippedExpense};
pub use grouping::{
    CurrencyGroup, CurrencyTotal, daily_totals, group_by_currency, totals_by_currency,
};
pub use matcher::{DEFAULT_TOLERANCE, Transfer, settle_balances};
pub use report::{CurrencySettlement, SettlementReport, build_report};
pub use settings::Settings;
pub use trip::{Activity, Day, ExpenseRecord, TripData};

mod aggregate;
mod balances;
mod currency;
mod error;
mod expense;
mod grouping;
mod matcher;
mod report;
mod settings;
mod trip;

type ResultEngine<T> = Result<T, EngineError>;

/// Everything the finance view shows for a trip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TripSummary {
    /// Every valid expense, sorted by date.
    pub expenses: Vec<Expense>,
    /// Spend per currency in first-encounter order.
    pub totals: Vec<CurrencyTotal>,
    pub settlements: SettlementReport,
    /// Records left out of the expense list or of the settlement.
    pub skipped: Vec<SkippedExpense>,
}

#[derive(Debug, Clone)]
pub struct Engine {
    settings: Settings,
    tolerance: f64,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The flat expense list, with the malformed records that were skipped.
    pub fn expenses(&self, trip: &TripData) -> Aggregation {
        aggregate(trip)
    }

    /// Runs the whole pipeline over a trip snapshot.
    ///
    /// Expenses whose payer is not a family member, or whose currency is not
    /// configured, stay in the expense list and the per-currency totals but
    /// are left out of the settlement and reported in `skipped`.
    ///
    /// An empty roster is [`EngineError::InvalidConfiguration`] as soon as
    /// one expense is in a configured currency.
    pub fn summarize(&self, trip: &TripData) -> ResultEngine<TripSummary> {
        let Aggregation {
            expenses,
            mut skipped,
        } = aggregate(trip);

        if self.settings.family_members.is_empty()
            && expenses
                .iter()
                .any(|e| self.settings.has_currency(e.currency.code()))
        {
            return Err(EngineError::InvalidConfiguration(
                "cannot split expenses without family members".to_string(),
            ));
        }

        let mut settled = Vec::with_capacity(expenses.len());
        for expense in &expenses {
            let reason = if !self.settings.has_member(&expense.payer) {
                Some(SkipReason::UnknownPayer)
            } else if !self.settings.has_currency(expense.currency.code()) {
                Some(SkipReason::UnconfiguredCurrency)
            } else {
                None
            };
            match reason {
                Some(reason) => {
                    tracing::warn!(
                        expense_id = %expense.id,
                        %reason,
                        "leaving expense out of settlement"
                    );
                    skipped.push(SkippedExpense::new(expense.id.clone(), reason));
                }
                None => settled.push(expense.clone()),
            }
        }

        let groups = group_by_currency(&settled, &self.settings.currencies);
        let settlements = build_report(&groups, &self.settings.family_members, self.tolerance)?;
        let totals = totals_by_currency(&expenses);

        Ok(TripSummary {
            expenses,
            totals,
            settlements,
            skipped,
        })
    }

    /// Only the settlement report of [`Engine::summarize`].
    pub fn settle(&self, trip: &TripData) -> ResultEngine<SettlementReport> {
        Ok(self.summarize(trip)?.settlements)
    }

    /// Per-currency totals of one itinerary day.
    pub fn daily_totals(
        &self,
        trip: &TripData,
        day_index: u32,
    ) -> ResultEngine<Vec<CurrencyTotal>> {
        let day = trip
            .day(day_index)
            .ok_or_else(|| EngineError::KeyNotFound(format!("day {day_index}")))?;
        Ok(daily_totals(day))
    }
}

fn normalize_member_name(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidConfiguration(
            "member name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    settings: Settings,
    tolerance: Option<f64>,
}

impl EngineBuilder {
    /// Pass the trip settings
    pub fn settings(mut self, settings: Settings) -> EngineBuilder {
        self.settings = settings;
        self
    }

    /// Override [`DEFAULT_TOLERANCE`]
    pub fn tolerance(mut self, tolerance: f64) -> EngineBuilder {
        self.tolerance = Some(tolerance);
        self
    }

    /// Validate the configuration and construct the `Engine`.
    pub fn build(self) -> ResultEngine<Engine> {
        let tolerance = self.tolerance.unwrap_or(DEFAULT_TOLERANCE);
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "tolerance must be a positive number, got {tolerance}"
            )));
        }

        let mut members: Vec<String> = Vec::with_capacity(self.settings.family_members.len());
        for raw in &self.settings.family_members {
            let name = normalize_member_name(raw)?;
            if members.contains(&name) {
                return Err(EngineError::InvalidConfiguration(format!(
                    "family member \"{name}\" is listed twice"
                )));
            }
            members.push(name);
        }

        Ok(Engine {
            settings: Settings {
                family_members: members,
                ..self.settings
            },
            tolerance,
        })
    }
}
