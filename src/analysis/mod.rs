/// Analysis layer: descriptive statistics over a loaded table.
///
/// `stats` holds the scalar building blocks (mean, quantiles, Pearson r,
/// histogram bins, KDE, box statistics); `table` assembles them into the
/// dataset-level artifacts (correlation matrix, grouped mean summary).
pub mod stats;
pub mod table;
