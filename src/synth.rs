use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// ISO 3166-1 alpha-2 codes the baseline synthesizer draws from.
pub const COUNTRY_CODES: [&str; 32] = [
    "US", "CA", "GB", "DE", "FR", "NL", "SE", "NO", "DK", "FI", "IE", "ES", "PT", "IT", "CH",
    "AT", "BE", "PL", "CZ", "AU", "NZ", "JP", "KR", "SG", "HK", "IN", "BR", "MX", "ZA", "AE",
    "NG", "RU",
];

const COMPANY_STEMS: [&str; 24] = [
    "Abbott", "Baumbach", "Cartwright", "Dickens", "Erdman", "Feeney", "Gleason", "Hammes",
    "Iverson", "Jacobi", "Kuhn", "Langworth", "Mills", "Nolan", "Ortiz", "Pagac", "Quigley",
    "Ritchie", "Schneider", "Torphy", "Ullrich", "Veum", "Wisoky", "Zboncak",
];

const COMPANY_SUFFIXES: [&str; 6] = ["Inc", "LLC", "Group", "Ltd", "and Sons", "Solutions"];

/// Company-style vendor name, e.g. "Kuhn Inc" or "Mills - Ortiz".
pub fn company_name<R: Rng>(rng: &mut R) -> String {
    let stem = COMPANY_STEMS[rng.gen_range(0..COMPANY_STEMS.len())];
    match rng.gen_range(0..3) {
        0 => {
            let other = COMPANY_STEMS[rng.gen_range(0..COMPANY_STEMS.len())];
            format!("{} - {}", stem, other)
        }
        1 => {
            let second = COMPANY_STEMS[rng.gen_range(0..COMPANY_STEMS.len())];
            let third = COMPANY_STEMS[rng.gen_range(0..COMPANY_STEMS.len())];
            format!("{}, {} and {}", stem, second, third)
        }
        _ => {
            let suffix = COMPANY_SUFFIXES[rng.gen_range(0..COMPANY_SUFFIXES.len())];
            format!("{} {}", stem, suffix)
        }
    }
}

pub fn country_code<R: Rng>(rng: &mut R) -> String {
    COUNTRY_CODES[rng.gen_range(0..COUNTRY_CODES.len())].to_string()
}

pub fn alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

/// Unique record id with the dashboard's `tx-` prefix. The uuid bytes come
/// from the injected source so seeded runs reproduce ids too.
pub fn transaction_id<R: Rng>(rng: &mut R) -> String {
    let uuid = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
    format!("tx-{}", uuid)
}

/// Uniform timestamp within the last `days` days.
pub fn recent_date<R: Rng>(rng: &mut R, days: i64) -> DateTime<Utc> {
    let offset = rng.gen_range(0..days * 86_400);
    Utc::now() - Duration::seconds(offset)
}

pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
