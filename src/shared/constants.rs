// =============================================================================
// DOMAIN CONSTANTS
// =============================================================================

/// Flat monthly fee per household, in rupiah. Used only to estimate the
/// aggregate arrears on the public transparency page; actual billed amounts
/// live on each iuran record.
pub const IURAN_BULANAN_FLAT: i64 = 150_000;

/// Households/residents created within this many days count as "new"
/// on the dashboard welcome card.
pub const BATAS_HARI_ANGGOTA_BARU: i64 = 3;

/// Age bucket boundaries (inclusive upper bounds, in whole years)
pub const BATAS_USIA_ANAK: i32 = 17;
pub const BATAS_USIA_DEWASA: i32 = 60;

/// Number of occupation groups shown on the dashboard
pub const JUMLAH_PEKERJAAN_TERATAS: usize = 5;
