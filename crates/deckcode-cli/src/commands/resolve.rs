//! `resolve`: look deck cards up in a catalog and total their prices

use crate::config::ResolveArgs;
use crate::error::Result;
use deckcode_catalog::{Currency, MemoryCardDatabase, PriceMode, PriceService};
use deckcode_formats::{CardId, Zone, import_any, resolve_deck};
use serde::Serialize;
use std::fmt::Write as _;

/// One deck entry in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// Card identifier
    pub id: CardId,
    /// Catalog name, `None` for unknown identifiers
    pub name: Option<String>,
}

/// Resolution and pricing summary of a deck
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveReport {
    /// Main zone entries
    pub main: Vec<ReportEntry>,
    /// Extra zone entries
    pub extra: Vec<ReportEntry>,
    /// Side zone entries
    pub side: Vec<ReportEntry>,
    /// Identifiers missing from the catalog, wire order, duplicates kept
    pub unknown: Vec<CardId>,
    /// Known cards without price data
    pub unpriced: Vec<CardId>,
    /// Currency of `price`
    pub currency: Currency,
    /// How `price` was derived from vendor prices
    pub price_mode: PriceMode,
    /// Total over every priced card
    pub price: f64,
}

impl ResolveReport {
    /// Entries of a zone
    pub fn zone(&self, zone: Zone) -> &[ReportEntry] {
        match zone {
            Zone::Main => &self.main,
            Zone::Extra => &self.extra,
            Zone::Side => &self.side,
        }
    }

    /// Plain-text rendering
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for zone in Zone::ALL {
            let entries = self.zone(zone);
            let _ = writeln!(out, "{zone} ({})", entries.len());
            for entry in entries {
                let name = entry.name.as_deref().unwrap_or("<unknown>");
                let _ = writeln!(out, "  {:>10}  {name}", entry.id);
            }
        }

        let _ = writeln!(out);
        if !self.unknown.is_empty() {
            let ids: Vec<String> = self.unknown.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "unknown ids: {}", ids.join(", "));
        }
        let _ = writeln!(
            out,
            "price ({}, {}): {}",
            self.price_mode,
            self.currency.name(),
            self.currency.format(self.price)
        );
        if !self.unpriced.is_empty() {
            let _ = writeln!(out, "cards without prices: {}", self.unpriced.len());
        }
        out
    }
}

/// Build a [`ResolveReport`] for `input` against an already loaded catalog
///
/// # Errors
///
/// Returns `CliError::Decode` if the input is not a valid deck.
pub fn report(
    input: &str,
    database: &MemoryCardDatabase,
    currency: Currency,
    price_mode: PriceMode,
) -> Result<ResolveReport> {
    let deck = import_any(input)?;
    let resolved = resolve_deck(&deck, database);

    let entries = |zone: Zone| -> Vec<ReportEntry> {
        resolved
            .zone(zone)
            .iter()
            .map(|card| ReportEntry {
                id: card.id(),
                name: card.card().map(|c| c.name.clone()),
            })
            .collect()
    };

    let lookup = PriceService::new().get_price(resolved.known_cards());
    let price = lookup.prices.convert(currency).select(price_mode);

    Ok(ResolveReport {
        main: entries(Zone::Main),
        extra: entries(Zone::Extra),
        side: entries(Zone::Side),
        unknown: resolved.unknown_ids(),
        unpriced: lookup.missing.iter().map(|card| card.id).collect(),
        currency,
        price_mode,
        price,
    })
}

/// Load the catalog, resolve `input` and render the report
///
/// # Errors
///
/// Returns `CliError` if the catalog cannot be loaded or the input is not a
/// valid deck.
pub fn handle(args: &ResolveArgs, input: &str) -> Result<String> {
    let database = MemoryCardDatabase::load(&args.catalog)?;
    let report = report(input, &database, args.currency, args.price_mode)?;

    tracing::debug!(
        unknown = report.unknown.len(),
        unpriced = report.unpriced.len(),
        "resolved deck against catalog"
    );

    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_text())
    }
}
