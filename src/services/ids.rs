use rand::Rng;

/// Adjectives drawn for the first id segment.
const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brave", "calm", "clever", "cosmic", "eager", "fancy", "fuzzy", "gentle",
    "happy", "jolly", "keen", "lively", "lucky", "mellow", "nimble", "polite", "proud", "quick",
    "quiet", "silly", "swift", "witty",
];

/// Animals drawn for the second id segment.
const ANIMALS: &[&str] = &[
    "badger", "beagle", "bison", "crane", "dingo", "falcon", "ferret", "gecko", "heron", "hornet",
    "ibis", "lemur", "marmot", "mole", "otter", "panda", "pelican", "quail", "racoon", "shrew",
    "stoat", "tapir", "walrus", "wombat",
];

/// Generate a fresh human-readable game id such as `calm-otter-42`.
///
/// Uniqueness relies on the size of the combined word/number space; ids are
/// not rechecked against the store, so a collision is treated as practically
/// impossible rather than handled.
pub fn random_game_id() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let animal = ANIMALS[rng.random_range(0..ANIMALS.len())];
    let number = rng.random_range(1..100u32);
    format!("{adjective}-{animal}-{number}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_follow_the_adjective_animal_number_shape() {
        for _ in 0..50 {
            let id = random_game_id();
            let parts: Vec<_> = id.split('-').collect();
            assert_eq!(parts.len(), 3, "unexpected id shape: {id}");
            assert!(ADJECTIVES.contains(&parts[0]));
            assert!(ANIMALS.contains(&parts[1]));
            let number: u32 = parts[2].parse().expect("numeric suffix");
            assert!((1..100).contains(&number));
        }
    }

    #[test]
    fn ids_vary_across_draws() {
        let ids: HashSet<_> = (0..100).map(|_| random_game_id()).collect();
        assert!(ids.len() > 1);
    }
}
