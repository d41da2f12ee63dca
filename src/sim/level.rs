//! Level layout generation
//!
//! Counts are fixed by the level number; positions, kinds and paradox
//! velocities come from the supplied RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{Item, ItemKind, Paradox};
use crate::consts::{BASE_ITEM_COUNT, ITEMS_PER_LEVEL, MAX_ITEM_COUNT, MAX_LEVEL};
use crate::settings::SimConfig;

/// Clamp a requested level into `1..=MAX_LEVEL`
pub fn clamp_level(level: u32) -> u32 {
    level.clamp(1, MAX_LEVEL)
}

/// Number of items on a level
pub fn item_count(level: u32) -> u32 {
    BASE_ITEM_COUNT
        .saturating_add(clamp_level(level).saturating_mul(ITEMS_PER_LEVEL))
        .min(MAX_ITEM_COUNT)
}

/// Number of paradoxes on a level (none on the first two)
pub fn paradox_count(level: u32) -> u32 {
    clamp_level(level) / 2
}

/// Generate the items and paradoxes for `level`
///
/// Ids are sequential: items first, then paradoxes.
pub fn generate_level<R: Rng + ?Sized>(
    level: u32,
    config: &SimConfig,
    rng: &mut R,
) -> (Vec<Item>, Vec<Paradox>) {
    let level = clamp_level(level);
    let margin = config.item_spawn_margin;
    let span_x = config.width - 2.0 * margin;
    let span_y = config.height - 2.0 * margin;

    let mut next_id = 0u32;

    let items: Vec<Item> = (0..item_count(level))
        .map(|_| {
            let pos = Vec2::new(
                rng.random::<f32>() * span_x + margin,
                rng.random::<f32>() * span_y + margin,
            );
            let kind = draw_item_kind(&mut *rng);
            let id = next_id;
            next_id += 1;
            Item {
                id,
                pos,
                kind,
                collected: false,
            }
        })
        .collect();

    let paradoxes: Vec<Paradox> = (0..paradox_count(level))
        .map(|_| {
            let pos = Vec2::new(
                rng.random::<f32>() * config.width,
                rng.random::<f32>() * config.height,
            );
            let vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * 2.0,
                (rng.random::<f32>() - 0.5) * 2.0,
            );
            let id = next_id;
            next_id += 1;
            Paradox {
                id,
                pos,
                vel,
                active: true,
            }
        })
        .collect();

    log::debug!(
        "Level {}: {} items, {} paradoxes",
        level,
        items.len(),
        paradoxes.len()
    );

    (items, paradoxes)
}

/// Two independent draws: 70% trash, then 80/20 crystal/artifact
fn draw_item_kind<R: Rng + ?Sized>(rng: &mut R) -> ItemKind {
    if rng.random::<f32>() < 0.7 {
        ItemKind::Trash
    } else if rng.random::<f32>() < 0.8 {
        ItemKind::Crystal
    } else {
        ItemKind::Artifact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_counts_by_level() {
        assert_eq!(item_count(1), 7);
        assert_eq!(item_count(4), 13);
        assert_eq!(item_count(5), 15);
        assert_eq!(item_count(40), 15);

        assert_eq!(paradox_count(1), 0);
        assert_eq!(paradox_count(2), 1);
        assert_eq!(paradox_count(3), 1);
        assert_eq!(paradox_count(4), 2);
        assert_eq!(paradox_count(9), 4);
    }

    #[test]
    fn test_level_zero_clamped() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let (items, paradoxes) = generate_level(0, &config, &mut rng);
        assert_eq!(items.len(), 7);
        assert!(paradoxes.is_empty());
    }

    #[test]
    fn test_huge_levels_clamped() {
        assert_eq!(clamp_level(u32::MAX), MAX_LEVEL);
        assert_eq!(item_count(u32::MAX / 2 + 1), 15);
        assert_eq!(item_count(u32::MAX), 15);
        assert_eq!(paradox_count(u32::MAX), MAX_LEVEL / 2);

        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let (items, paradoxes) = generate_level(u32::MAX, &config, &mut rng);
        assert_eq!(items.len(), 15);
        assert_eq!(paradoxes.len(), (MAX_LEVEL / 2) as usize);
    }

    #[test]
    fn test_positions_in_bounds() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(2024);
        for level in 1..12 {
            let (items, paradoxes) = generate_level(level, &config, &mut rng);
            for item in &items {
                assert!((50.0..=750.0).contains(&item.pos.x), "{:?}", item);
                assert!((50.0..=550.0).contains(&item.pos.y), "{:?}", item);
                assert!(!item.collected);
            }
            for p in &paradoxes {
                assert!((0.0..=800.0).contains(&p.pos.x));
                assert!((0.0..=600.0).contains(&p.pos.y));
                assert!((-1.0..1.0).contains(&p.vel.x));
                assert!((-1.0..1.0).contains(&p.vel.y));
                assert!(p.active);
            }
        }
    }

    #[test]
    fn test_ids_unique_and_sequential() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let (items, paradoxes) = generate_level(6, &config, &mut rng);
        let ids: Vec<u32> = items
            .iter()
            .map(|i| i.id)
            .chain(paradoxes.iter().map(|p| p.id))
            .collect();
        let expected: Vec<u32> = (0..ids.len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = SimConfig::default();
        let a = generate_level(5, &config, &mut Pcg32::seed_from_u64(77));
        let b = generate_level(5, &config, &mut Pcg32::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_kind_distribution() {
        let mut rng = Pcg32::seed_from_u64(31337);
        let n = 20_000;
        let mut counts = [0u32; 3];
        for _ in 0..n {
            match draw_item_kind(&mut rng) {
                ItemKind::Trash => counts[0] += 1,
                ItemKind::Crystal => counts[1] += 1,
                ItemKind::Artifact => counts[2] += 1,
            }
        }
        let share = |c: u32| c as f32 / n as f32;
        assert!((share(counts[0]) - 0.70).abs() < 0.02, "{:?}", counts);
        assert!((share(counts[1]) - 0.24).abs() < 0.02, "{:?}", counts);
        assert!((share(counts[2]) - 0.06).abs() < 0.015, "{:?}", counts);
    }
}
