//! End-to-end generation tests over hand-built levels.

use arcade_rulegen::core::GeneratorConfig;
use arcade_rulegen::generator::RuleGenerator;
use arcade_rulegen::rules::{CollisionTarget, Interaction, InteractionEffect, RuleSet, Termination};
use arcade_rulegen::sprites::{LevelInventory, SpriteCategory, SpriteDescriptor};

fn avatar(name: &str) -> SpriteDescriptor {
    SpriteDescriptor::new(name, SpriteCategory::Avatar)
}

fn immovable(name: &str) -> SpriteDescriptor {
    SpriteDescriptor::new(name, SpriteCategory::Immovable)
}

fn generate(inventory: &LevelInventory, config: GeneratorConfig) -> RuleSet {
    RuleGenerator::new(inventory, config).unwrap().generate()
}

/// 5x5 level: hero, a full border wall and a door.
fn walled_door_level() -> LevelInventory {
    LevelInventory::builder(5, 5)
        .sprite(avatar("hero"), 1)
        .sprite(immovable("wall"), 16)
        .border_count("wall", 16)
        .sprite(
            SpriteDescriptor::new("door", SpriteCategory::Portal).with_subtype("Door"),
            1,
        )
        .build()
        .unwrap()
}

/// Shooter avatar facing a bomber NPC.
fn bomber_level() -> LevelInventory {
    LevelInventory::builder(8, 8)
        .sprite(avatar("avatar").with_child("missile"), 1)
        .sprite(SpriteDescriptor::new("missile", SpriteCategory::Movable), 0)
        .sprite(
            SpriteDescriptor::new("ufo", SpriteCategory::Npc)
                .with_subtype("Bomber")
                .with_child("bomb"),
            3,
        )
        .sprite(SpriteDescriptor::new("bomb", SpriteCategory::Movable), 0)
        .build()
        .unwrap()
}

/// Busy level touching every pass.
fn mixed_level() -> LevelInventory {
    LevelInventory::builder(10, 10)
        .sprite(avatar("avatar").with_child("sword"), 1)
        .sprite(SpriteDescriptor::new("sword", SpriteCategory::Movable), 0)
        .sprite(immovable("wall"), 36)
        .border_count("wall", 36)
        .sprite(immovable("coin"), 5)
        .sprite(immovable("lava"), 3)
        .sprite(SpriteDescriptor::new("gold", SpriteCategory::Resource), 4)
        .sprite(
            SpriteDescriptor::new("rabbit", SpriteCategory::Npc).with_subtype("fleeing"),
            2,
        )
        .sprite(
            SpriteDescriptor::new("wolf", SpriteCategory::Npc)
                .with_subtype("Chaser")
                .with_child("avatar"),
            1,
        )
        .sprite(
            SpriteDescriptor::new("hive", SpriteCategory::Spawner).with_child("bee"),
            1,
        )
        .sprite(SpriteDescriptor::new("bee", SpriteCategory::Movable), 0)
        .sprite(SpriteDescriptor::new("boulder", SpriteCategory::Movable), 2)
        .sprite(
            SpriteDescriptor::new("hole", SpriteCategory::Portal).with_subtype("Portal"),
            1,
        )
        .build()
        .unwrap()
}

fn count_rules(rules: &RuleSet, actor: &str, target: &str) -> usize {
    rules
        .interactions
        .iter()
        .filter(|rule| rule.is_between(actor, target))
        .count()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_walled_level_with_door() {
    let inventory = walled_door_level();

    for seed in 0..40 {
        let rules = generate(&inventory, GeneratorConfig::default().with_seed(seed));

        assert!(rules
            .interactions
            .iter()
            .any(|rule| rule.actor == "hero" && rule.target == CollisionTarget::EdgeOfScreen));
        assert_eq!(count_rules(&rules, "hero", "wall"), 1, "seed {seed}");
        assert!(rules
            .interactions
            .iter()
            .any(|rule| rule.is_between("door", "hero") && rule.effect.is_destroy()));

        assert_eq!(rules.terminations, vec![Termination::sprite_counter("door", true)]);
    }
}

#[test]
fn test_wall_role_detected() {
    let generator = RuleGenerator::new(walled_door_level(), GeneratorConfig::default()).unwrap();
    assert_eq!(generator.roles().wall.as_deref(), Some("wall"));
    assert_eq!(generator.roles().door.as_deref(), Some("door"));
    assert_eq!(generator.roles().score, None);
}

#[test]
fn test_bomber_children_harmful() {
    let config = GeneratorConfig::default().with_bomber_child_harmful_prob(1.0);
    let mut generator = RuleGenerator::new(bomber_level(), config).unwrap();
    let rules = generator.generate();

    assert!(generator.classification().harmful_npcs.contains("ufo"));
    assert!(generator.classification().harmful_objects.contains("bomb"));
    assert_eq!(generator.critical().enemy_npc.as_deref(), Some("ufo"));

    let rendered = rules.to_lines().0;
    assert!(rendered.contains(&"ufo missile > killSprite scoreChange=2".to_string()));
    assert!(rendered.contains(&"bomb missile > killSprite scoreChange=1".to_string()));
    assert!(rendered.contains(&"missile ufo > killSprite".to_string()));
    assert!(rendered.contains(&"avatar bomb > killSprite".to_string()));
}

#[test]
fn test_bomber_children_collectible() {
    let config = GeneratorConfig::default().with_bomber_child_harmful_prob(0.0);
    let mut generator = RuleGenerator::new(bomber_level(), config).unwrap();
    let rules = generator.generate();

    assert!(generator.classification().collectibles.contains("bomb"));
    assert!(rules
        .interactions
        .iter()
        .any(|rule| rule.is_between("bomb", "avatar") && rule.effect.score_delta() == Some(1)));
}

#[test]
fn test_survival_only_level() {
    let inventory = LevelInventory::builder(10, 10)
        .sprite(avatar("avatar"), 1)
        .sprite(immovable("grass"), 100)
        .build()
        .unwrap();

    for seed in 0..40 {
        let rules = generate(&inventory, GeneratorConfig::default().with_seed(seed));
        assert_eq!(rules.terminations.len(), 1);
        match rules.terminations[0] {
            Termination::Timeout { limit, win } => {
                assert!(win);
                assert!((500..=1100).contains(&limit));
                assert_eq!(limit % 100, 0);
            }
            ref other => panic!("expected survival timeout, got {other}"),
        }
    }
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn test_same_seed_same_rules() {
    let inventory = mixed_level();
    for seed in [1, 7, 42, 1234] {
        let config = GeneratorConfig::default().with_seed(seed);
        assert_eq!(generate(&inventory, config.clone()), generate(&inventory, config));
    }
}

#[test]
fn test_replay_from_rng_state() {
    let mut generator = RuleGenerator::new(mixed_level(), GeneratorConfig::default()).unwrap();
    generator.generate();

    let state = generator.rng_state();
    let second = generator.generate();
    generator.restore_rng(&state);

    assert_eq!(generator.generate(), second);
}

#[test]
fn test_spike_never_equals_score() {
    let inventory = mixed_level();
    for seed in 0..100 {
        let generator = RuleGenerator::new(&inventory, GeneratorConfig::default().with_seed(seed)).unwrap();
        let roles = generator.roles();
        if let (Some(score), Some(spike)) = (&roles.score, &roles.spike) {
            assert_ne!(score, spike);
        }
    }
}

#[test]
fn test_no_teleport_without_portals() {
    let inventory = bomber_level();
    for seed in 0..20 {
        let rules = generate(&inventory, GeneratorConfig::default().with_seed(seed));
        assert!(rules
            .interactions
            .iter()
            .all(|rule| rule.effect != InteractionEffect::TeleportToExit));
    }
}

#[test]
fn test_teleport_rule_for_portal() {
    let rules = generate(&mixed_level(), GeneratorConfig::default());
    assert!(rules
        .interactions
        .iter()
        .any(|rule| rule.is_between("avatar", "hole") && rule.effect == InteractionEffect::TeleportToExit));
}

#[test]
fn test_no_resource_rules_without_resources() {
    let config = GeneratorConfig::default().with_kill_resource_prob(1.0);
    let rules = generate(&bomber_level(), config);
    assert!(rules
        .interactions
        .iter()
        .all(|rule| rule.effect != InteractionEffect::CollectResource));
}

#[test]
fn test_resources_collected_and_shot() {
    let config = GeneratorConfig::default().with_kill_resource_prob(1.0);
    let rules = generate(&mixed_level(), config);

    assert_eq!(count_rules(&rules, "gold", "avatar"), 1);
    assert!(rules
        .interactions
        .iter()
        .any(|rule| rule.is_between("sword", "gold") && rule.effect.is_destroy()));
    assert!(rules
        .interactions
        .iter()
        .any(|rule| rule.is_between("gold", "sword") && rule.effect.score_delta().is_some()));
}

#[test]
fn test_loss_condition_per_live_avatar() {
    let inventory = LevelInventory::builder(8, 8)
        .sprite(avatar("knight"), 1)
        .sprite(avatar("ghost"), 0)
        .sprite(
            SpriteDescriptor::new("ufo", SpriteCategory::Npc).with_subtype("bomber"),
            1,
        )
        .build()
        .unwrap();

    for seed in 0..20 {
        let rules = generate(&inventory, GeneratorConfig::default().with_seed(seed));
        let losses: Vec<&Termination> = rules.terminations.iter().filter(|t| !t.is_win()).collect();
        assert!(losses.contains(&&Termination::sprite_counter("knight", false)));
        assert!(!losses.iter().any(|t| t.counts("ghost")));
        assert_eq!(losses.iter().filter(|t| t.counts("knight")).count(), 1);
    }
}

#[test]
fn test_repeated_calls_reset_labels() {
    let mut generator = RuleGenerator::new(mixed_level(), GeneratorConfig::default()).unwrap();
    for _ in 0..10 {
        let rules = generator.generate();
        let sets = &rules.sprite_sets;
        assert!(sets.fleeing.len() <= 1);
        assert!(rules.has_win());
    }
}

// =============================================================================
// Category passes
// =============================================================================

const PALETTE: [InteractionEffect; 5] = [
    InteractionEffect::StepBack,
    InteractionEffect::FlipDirection,
    InteractionEffect::ReverseDirection,
    InteractionEffect::TurnAround,
    InteractionEffect::WrapAround,
];

/// Edge-of-screen effects for the named sprites, in rule order.
fn edge_effects<'a>(rules: &'a RuleSet, names: &[&str]) -> Vec<&'a InteractionEffect> {
    rules
        .interactions
        .iter()
        .filter(|rule| rule.target == CollisionTarget::EdgeOfScreen && names.contains(&rule.actor.as_str()))
        .map(|rule| &rule.effect)
        .collect()
}

/// Walled level with two free movables and two NPCs that get no family rules.
fn drifter_level() -> LevelInventory {
    LevelInventory::builder(8, 8)
        .sprite(avatar("avatar"), 1)
        .sprite(immovable("wall"), 28)
        .border_count("wall", 28)
        .sprite(SpriteDescriptor::new("crate", SpriteCategory::Movable), 2)
        .sprite(SpriteDescriptor::new("barrel", SpriteCategory::Movable), 1)
        .sprite(SpriteDescriptor::new("moth", SpriteCategory::Npc), 2)
        .sprite(SpriteDescriptor::new("bat", SpriteCategory::Npc), 1)
        .build()
        .unwrap()
}

/// 10x10 level whose only score/spike candidates are coin and lava.
fn spike_level() -> LevelInventory {
    LevelInventory::builder(10, 10)
        .sprite(avatar("avatar"), 1)
        .sprite(immovable("coin"), 5)
        .sprite(immovable("lava"), 3)
        .build()
        .unwrap()
}

#[test]
fn test_fleeing_npc_is_target() {
    let mut generator = RuleGenerator::new(mixed_level(), GeneratorConfig::default()).unwrap();
    let rules = generator.generate();

    assert!(generator.classification().fleeing_npcs.contains("rabbit"));
    assert!(generator.classification().collectibles.contains("rabbit"));
    // Listed once, under the first group that claims it
    assert!(rules.sprite_sets.fleeing.contains(&"rabbit".to_string()));
    assert!(!rules.sprite_sets.collectible.contains(&"rabbit".to_string()));
    assert!(rules
        .interactions
        .iter()
        .any(|rule| rule.is_between("rabbit", "avatar") && rule.effect.score_delta() == Some(1)));
}

#[test]
fn test_fleeing_npc_anchors_collectible_win() {
    let inventory = LevelInventory::builder(6, 6)
        .sprite(avatar("avatar"), 1)
        .sprite(
            SpriteDescriptor::new("rabbit", SpriteCategory::Npc)
                .with_subtype("fleeing")
                .with_child("avatar"),
            1,
        )
        .build()
        .unwrap();

    for seed in 0..10 {
        let mut generator = RuleGenerator::new(&inventory, GeneratorConfig::default().with_seed(seed)).unwrap();
        let rules = generator.generate();

        assert!(generator.classification().collectibles.contains("rabbit"));
        assert_eq!(generator.critical().collectible.as_deref(), Some("rabbit"));
        assert_eq!(rules.terminations.len(), 2);
        assert_eq!(rules.terminations[0], Termination::sprite_counter("rabbit", true));
        match rules.terminations[1] {
            Termination::Timeout { limit, win } => {
                assert!(!win);
                assert!((2000..=2500).contains(&limit));
            }
            ref other => panic!("expected timeout, got {other}"),
        }
    }
}

#[test]
fn test_childless_fleeing_npc_flees_every_avatar() {
    let inventory = LevelInventory::builder(6, 6)
        .sprite(avatar("knight"), 1)
        .sprite(avatar("squire"), 1)
        .sprite(
            SpriteDescriptor::new("mouse", SpriteCategory::Npc).with_subtype("Fleeing"),
            3,
        )
        .build()
        .unwrap();

    let rules = generate(&inventory, GeneratorConfig::default());
    for pursuer in ["knight", "squire"] {
        assert!(rules
            .interactions
            .contains(&Interaction::new("mouse", pursuer, InteractionEffect::destroy_scoring(1))));
        assert_eq!(count_rules(&rules, "mouse", pursuer), 1);
    }
}

#[test]
fn test_spike_harmful() {
    let inventory = spike_level();
    let mut generator = RuleGenerator::new(&inventory, GeneratorConfig::default().with_spike_prob(1.0)).unwrap();
    let spike = generator.roles().spike.clone().unwrap();
    let rules = generator.generate();

    assert!(rules
        .interactions
        .contains(&Interaction::new("avatar", spike.as_str(), InteractionEffect::destroy())));
    assert!(generator.classification().harmful_objects.contains(&spike));
    assert!(!generator.classification().collectibles.contains(&spike));
    assert!(rules.terminations.contains(&Termination::sprite_counter("avatar", false)));
}

#[test]
fn test_spike_collectible() {
    let inventory = spike_level();
    let mut generator = RuleGenerator::new(&inventory, GeneratorConfig::default().with_spike_prob(0.0)).unwrap();
    let spike = generator.roles().spike.clone().unwrap();
    let rules = generator.generate();

    assert!(rules
        .interactions
        .contains(&Interaction::new(spike.as_str(), "avatar", InteractionEffect::destroy_scoring(2))));
    assert_eq!(count_rules(&rules, "avatar", &spike), 0);
    assert!(generator.classification().collectibles.contains(&spike));
    // Nothing left to hurt the avatar
    assert!(!generator.classification().any_harmful());
}

#[test]
fn test_resources_kill_spawned_sprites() {
    let config = GeneratorConfig::default().with_kill_resource_prob(1.0);
    let rules = generate(&mixed_level(), config);
    assert!(rules
        .interactions
        .contains(&Interaction::new("gold", "bee", InteractionEffect::destroy())));

    let config = GeneratorConfig::default().with_kill_resource_prob(0.0);
    let rules = generate(&mixed_level(), config);
    assert_eq!(count_rules(&rules, "gold", "bee"), 0);
}

#[test]
fn test_palette_shared_within_movables_and_npcs() {
    let inventory = drifter_level();
    for seed in 0..20 {
        let config = GeneratorConfig::default().with_seed(seed).with_fire_wall_prob(0.0);
        let rules = generate(&inventory, config);

        for group in [&["crate", "barrel"], &["moth", "bat"]] {
            let effects = edge_effects(&rules, group);
            assert_eq!(effects.len(), 2);
            assert!(PALETTE.contains(effects[0]));
            assert_eq!(effects[0], effects[1]);
        }
        // NPCs bounce off the wall the same way they leave the screen
        let npc_edge = edge_effects(&rules, &["moth"])[0];
        assert!(rules
            .interactions
            .contains(&Interaction::new("moth", "wall", npc_edge.clone())));
    }
}

#[test]
fn test_fire_wall_kills_movables_and_npcs() {
    let config = GeneratorConfig::default().with_fire_wall_prob(1.0);
    let rules = generate(&drifter_level(), config);

    let effects = edge_effects(&rules, &["crate", "barrel", "moth", "bat"]);
    assert_eq!(effects.len(), 4);
    assert!(effects.iter().all(|effect| **effect == InteractionEffect::destroy()));
    assert!(rules
        .interactions
        .contains(&Interaction::new("bat", "wall", InteractionEffect::destroy())));
}

#[test]
fn test_chaser_hunting_avatar_is_harmful() {
    let mut generator = RuleGenerator::new(mixed_level(), GeneratorConfig::default()).unwrap();
    let rules = generator.generate();

    assert!(generator.classification().harmful_npcs.contains("wolf"));
    assert_eq!(count_rules(&rules, "avatar", "wolf"), 1);
}

#[test]
fn test_chaser_prey_transforms_or_dies() {
    let inventory = LevelInventory::builder(6, 6)
        .sprite(avatar("avatar"), 1)
        .sprite(
            SpriteDescriptor::new("zombie", SpriteCategory::Npc)
                .with_subtype("chaser")
                .with_child("villager"),
            1,
        )
        .sprite(SpriteDescriptor::new("villager", SpriteCategory::Npc), 3)
        .build()
        .unwrap();

    let converted = generate(&inventory, GeneratorConfig::default().with_seed(0));
    let rule = converted
        .interactions
        .iter()
        .find(|rule| rule.is_between("villager", "zombie"))
        .unwrap();
    assert!(matches!(
        &rule.effect,
        InteractionEffect::Destroy { score_delta: None } | InteractionEffect::TransformTo { .. }
    ));
    if let InteractionEffect::TransformTo { stype } = &rule.effect {
        assert_eq!(stype, "zombie");
    }
}

#[test]
fn test_spawner_inherits_child_labels() {
    let harmful = GeneratorConfig::default().with_spawned_harmful_prob(1.0);
    let mut generator = RuleGenerator::new(mixed_level(), harmful).unwrap();
    let rules = generator.generate();
    assert!(generator.classification().harmful_objects.contains("hive"));
    assert_eq!(count_rules(&rules, "avatar", "bee"), 1);

    let useful = GeneratorConfig::default().with_spawned_harmful_prob(0.0);
    let mut generator = RuleGenerator::new(mixed_level(), useful).unwrap();
    generator.generate();
    assert!(generator.classification().collectibles.contains("hive"));
    assert!(!generator.classification().harmful_objects.contains("bee"));
}

#[test]
fn test_owned_movables_skip_movable_pass() {
    let rules = generate(&mixed_level(), GeneratorConfig::default());
    assert_eq!(count_rules(&rules, "avatar", "sword"), 0);
    assert_eq!(count_rules(&rules, "sword", "avatar"), 0);
    assert_eq!(count_rules(&rules, "avatar", "boulder") + count_rules(&rules, "boulder", "avatar"), 1);
}

#[test]
fn test_fire_wall_with_resource_gate() {
    let mut config = GeneratorConfig::default().with_fire_wall_prob(1.0);
    config.kill_if_has_less_prob = 1.0;

    let rules = generate(&mixed_level(), config);
    let wall_rule = rules
        .interactions
        .iter()
        .find(|rule| rule.is_between("avatar", "wall"))
        .unwrap();
    assert_eq!(
        wall_rule.effect,
        InteractionEffect::DestroyIfHasLess {
            resource: "gold".to_string(),
            limit: 3,
        }
    );

    // A fleeing NPC keeps movers from burning on the wall
    assert!(rules
        .interactions
        .iter()
        .filter(|rule| rule.actor == "rabbit")
        .all(|rule| !rule.effect.is_destroy() || rule.target.sprite_name() == Some("avatar")));
}

#[test]
fn test_fire_wall_without_resources_kills() {
    let config = GeneratorConfig::default().with_fire_wall_prob(1.0);
    let rules = generate(&walled_door_level(), config);
    let wall_rule = rules
        .interactions
        .iter()
        .find(|rule| rule.is_between("hero", "wall"))
        .unwrap();
    assert_eq!(wall_rule.effect, InteractionEffect::destroy());
}

#[test]
fn test_projectiles_break_walls() {
    let config = GeneratorConfig::default()
        .with_fire_wall_prob(0.0)
        .with_destroy_wall_prob(1.0);
    let rules = generate(&mixed_level(), config);
    // Once as the avatar's projectile, once as a movable
    assert_eq!(count_rules(&rules, "sword", "wall"), 2);
    assert_eq!(count_rules(&rules, "wall", "sword"), 2);
    // Destroying the wall replaces the bounce for free movables
    assert_eq!(count_rules(&rules, "boulder", "wall"), 1);
    assert!(rules
        .interactions
        .iter()
        .any(|rule| rule.is_between("boulder", "wall") && rule.effect.is_destroy()));
}

// =============================================================================
// Layouts and output
// =============================================================================

#[test]
fn test_generate_from_layout() {
    let layout = "\
wwwwww
wA..dw
w.c..w
w..e.w
wwwwww
";
    let descriptors = [
        avatar("avatar").with_child("arrow"),
        SpriteDescriptor::new("arrow", SpriteCategory::Movable),
        immovable("wall"),
        immovable("coin"),
        SpriteDescriptor::new("exit", SpriteCategory::Portal).with_subtype("Door"),
        SpriteDescriptor::new("ghost", SpriteCategory::Npc).with_subtype("RandomNPC"),
    ];
    let legend: &[(char, &[&str])] = &[
        ('w', &["wall"]),
        ('A', &["avatar"]),
        ('.', &[]),
        ('d', &["exit"]),
        ('c', &["coin"]),
        ('e', &["ghost"]),
    ];
    let inventory = LevelInventory::from_layout(layout, legend, descriptors).unwrap();

    let mut generator = RuleGenerator::new(inventory, GeneratorConfig::default()).unwrap();
    assert_eq!(generator.roles().wall.as_deref(), Some("wall"));
    assert_eq!(generator.roles().score.as_deref(), Some("coin"));

    let rules = generator.generate();
    assert!(count_rules(&rules, "coin", "avatar") >= 1);
    assert_eq!(rules.terminations.first().map(Termination::is_win), Some(true));
    assert!(rules.terminations[0].counts("exit"));
}

#[test]
fn test_rule_set_snapshot_roundtrip() {
    let rules = generate(&mixed_level(), GeneratorConfig::default());
    let bytes = rules.to_bytes().unwrap();
    assert_eq!(RuleSet::from_bytes(&bytes).unwrap(), rules);
}
