//! Random restaurant generation.

use rand::{Rng, seq::SliceRandom};

use crate::models::{NewRestaurant, YesNo};

/// Vocabulary and hour ranges for generated restaurants.
#[derive(Debug, Clone)]
pub struct RestaurantGenConfig {
    pub name_prefixes: Vec<String>,
    pub name_suffixes: Vec<String>,
    pub styles: Vec<String>,
    /// Inclusive range of opening hours (whole hours).
    pub open_hours: (u8, u8),
    /// Inclusive range of closing hours (whole hours).
    pub close_hours: (u8, u8),
}

impl Default for RestaurantGenConfig {
    fn default() -> Self {
        let strings =
            |values: &[&str]| -> Vec<String> { values.iter().map(|v| v.to_string()).collect() };

        Self {
            name_prefixes: strings(&[
                "The Golden",
                "The Rusty",
                "The Cozy",
                "The Spicy",
                "The Sweet",
                "The Savory",
            ]),
            name_suffixes: strings(&["Duck", "Spoon", "House", "Place", "Corner", "Table"]),
            styles: strings(&[
                "Italian",
                "Argentinian",
                "Moroccan",
                "Tunisian",
                "Polish",
                "American",
                "Chinese",
            ]),
            open_hours: (9, 11),
            close_hours: (20, 23),
        }
    }
}

/// Generates random restaurants for filling a database.
pub struct RestaurantGenerator {
    config: RestaurantGenConfig,
}

impl RestaurantGenerator {
    pub fn new() -> Self {
        Self {
            config: RestaurantGenConfig::default(),
        }
    }

    /// Generates a single restaurant. Address and deliveries are left unset.
    pub fn generate(&self, rng: &mut impl Rng) -> NewRestaurant {
        let name = format!(
            "{} {}",
            pick(&self.config.name_prefixes, rng),
            pick(&self.config.name_suffixes, rng)
        );

        NewRestaurant {
            name,
            address: None,
            style: pick(&self.config.styles, rng),
            vegetarian: YesNo::from(rng.gen_bool(0.5)),
            open_hour: random_hour(self.config.open_hours, rng),
            close_hour: random_hour(self.config.close_hours, rng),
            deliveries: None,
        }
    }

    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<NewRestaurant> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for RestaurantGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(values: &[String], rng: &mut impl Rng) -> String {
    values.choose(rng).cloned().unwrap_or_default()
}

fn random_hour((min, max): (u8, u8), rng: &mut impl Rng) -> String {
    format!("{:02}:00", rng.gen_range(min..=max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use validator::Validate;

    #[test]
    fn test_generate_restaurant() {
        let generator = RestaurantGenerator::new();
        let mut rng = rand::thread_rng();
        let restaurant = generator.generate(&mut rng);

        let config = RestaurantGenConfig::default();
        let (prefix, suffix) = restaurant.name.rsplit_once(' ').unwrap();
        assert!(config.name_prefixes.iter().any(|p| p == prefix));
        assert!(config.name_suffixes.iter().any(|s| s == suffix));
        assert!(config.styles.contains(&restaurant.style));
        assert!(restaurant.address.is_none());
        assert!(restaurant.deliveries.is_none());
        assert!(restaurant.validate().is_ok());
    }

    #[test]
    fn test_hours_within_range() {
        let generator = RestaurantGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for restaurant in generator.generate_batch(200, &mut rng) {
            assert!(("09:00"..="11:00").contains(&restaurant.open_hour.as_str()));
            assert!(("20:00"..="23:00").contains(&restaurant.close_hour.as_str()));
        }
    }

    #[test]
    fn test_generate_batch_is_reproducible() {
        let generator = RestaurantGenerator::new();
        let first = generator.generate_batch(10, &mut StdRng::seed_from_u64(42));
        let second = generator.generate_batch(10, &mut StdRng::seed_from_u64(42));

        assert_eq!(first.len(), 10);
        assert_eq!(first, second);
    }
}
