//! The world of Razukan.
//!
//! [`initialize_world`] is pure: no randomness, no input, and every call
//! returns an identical world. Saved games are restored on top of it.

use crate::enemy::Enemy;
use crate::item::Item;
use crate::location::{Location, LocationId};
use crate::npc::Npc;
use crate::world::World;

/// Key of the room a new game starts in.
pub const START: &str = "castle_start";
/// The puzzle-gated scroll that teaches a spell when picked up.
pub const SPELL_SCROLL: &str = "magic scroll";
/// The spell taught by [`SPELL_SCROLL`].
pub const SCROLL_SPELL: &str = "firebolt";

/// A health potion.
pub fn health_potion() -> Item {
    Item::new("health potion", "Restores health.").usable()
}

/// A mana potion.
pub fn mana_potion() -> Item {
    Item::new("mana potion", "Restores mana.").usable()
}

/// A one-shot explosive.
pub fn bomb() -> Item {
    Item::new(
        "bomb",
        "A clay pot packed with black powder. Best thrown at something angry.",
    )
    .usable()
}

/// The monster hiding behind a townsperson's face.
pub fn hidden_monster() -> Enemy {
    Enemy::new(
        "Hidden Monster",
        "Shadowed Deceiver",
        "A cloaked figure with glowing eyes, its form shimmering unnaturally.",
        60,
        25,
    )
}

/// Build a pristine world and return it with the starting location key.
pub fn initialize_world() -> (World, LocationId) {
    let mut world = World::new();
    for location in castle()
        .into_iter()
        .chain(town())
        .chain(lokendar())
        .chain(far_isles())
    {
        world.insert(location);
    }
    (world, LocationId::new(START))
}

fn castle() -> Vec<Location> {
    vec![
        Location::new(
            START,
            "Castle Starting Room",
            "You wake up in a dimly lit room lit by candles on the walls. There's a locked door ahead. You have no memory of how you got here.",
        )
        .with_item(Item::new("key", "A rusty key to unlock doors.").usable())
        .with_locked_exit("north", "castle_hall"),
        Location::new(
            "castle_hall",
            "Castle Hall",
            "A grand hall with echoing footsteps. Paths lead to various rooms.",
        )
        .with_exit("south", START)
        .with_exit("east", "castle_library")
        .with_exit("west", "castle_armory")
        .with_exit("north", "castle_kitchen")
        .with_exit("chamber", "dragon_chamber"),
        Location::new(
            "castle_library",
            "Castle Library",
            "Shelves filled with ancient books. Maybe some clues here.",
        )
        .with_item(Item::new(
            "book on liches",
            "A book mentioning Razukan, a powerful lich defeated long ago.",
        ))
        .with_exit("west", "castle_hall"),
        Location::new(
            "castle_armory",
            "Castle Armory",
            "Weapons and armor racks. Some might be useful.",
        )
        .with_item(Item::new("sword", "A sharp sword for fighting.").usable())
        .with_item(bomb())
        .with_exit("east", "castle_hall"),
        Location::new(
            "castle_kitchen",
            "Castle Kitchen",
            "Pots and pans, some food scraps. Nothing fancy.",
        )
        .with_item(health_potion())
        .with_exit("south", "castle_hall"),
        Location::new(
            "dragon_chamber",
            "Dragon Chamber",
            "A massive chamber with ancient carvings. The dragon blocks the path to the outside.",
        )
        .with_enemy(
            Enemy::new(
                "Dragon",
                "The Dragon, Flame-Wreathed Sovereign",
                "A colossal beast with scales of molten crimson, its eyes glowing like embers and wings casting ominous shadows.",
                150,
                50,
            )
            .with_info(
                "The dragon roars: 'Razukan the Lich has returned after a thousand years. He cursed you to sleep!'",
            )
            .with_gold(50),
        )
        .with_exit("south", "castle_hall")
        .with_locked_exit("out", "town_square"),
    ]
}

fn town() -> Vec<Location> {
    vec![
        Location::new(
            "town_square",
            "Town Square",
            "A small town terrified by a nearby hydra. Villagers look scared.",
        )
        .with_exit("north", "forest")
        .with_exit("east", "shrine")
        .with_exit("west", "hydra_lair")
        .with_exit("south", "shop")
        .with_exit("dock", "dock")
        .with_exit("castle", "dragon_chamber"),
        Location::new(
            "forest",
            "Forest",
            "Dense woods with paths leading deeper. Vine-covered ruins stand behind a sealed stone gate with two empty sockets.",
        )
        .with_item(Item::new("sun fragment", "Half of a stone disc, warm to the touch.").usable())
        .with_enemy(Enemy::new(
            "Goblin",
            "Forest Skulker",
            "A wiry green creature clutching a rusty dagger.",
            40,
            10,
        ))
        .with_exit("south", "town_square")
        .with_locked_exit("ruins", "ancient_ruins"),
        Location::new(
            "ancient_ruins",
            "Ancient Ruins",
            "Crumbling pillars and toppled statues. Something enormous stirs among the stones.",
        )
        .with_enemy(
            Enemy::new(
                "Stone Golem",
                "Warden of the Forgotten Gate",
                "A towering figure of fused rubble, runes smouldering across its chest.",
                130,
                40,
            )
            .with_info(
                "The golem crumbles, and a carved map points to a spring hidden across the sea.",
            )
            .with_gold(60),
        )
        .with_exit("out", "forest"),
        Location::new(
            "shrine",
            "Shrine",
            "An ancient shrine with mystical aura. A memorization puzzle guards the magic scroll.",
        )
        .with_item(Item::new(SPELL_SCROLL, "Allows learning spells.").usable())
        .with_puzzle()
        .with_exit("west", "town_square"),
        Location::new("hydra_lair", "Hydra's Lair", "A dark and eerie lair.")
            .with_item(
                Item::new("moon fragment", "Half of a stone disc, cold as river water.").usable(),
            )
            .with_enemy(
                Enemy::new(
                    "Hydra",
                    "Venomous Terror of the Deep",
                    "A multi-headed serpent with glistening green scales, each head hissing with dripping venom.",
                    120,
                    35,
                )
                .with_info(
                    "The hydra hisses: 'Razukan is on Lokendar Island, plotting with Thanatos to corrupt the world!'",
                )
                .with_gold(50),
            )
            .with_exit("east", "town_square"),
        Location::new("shop", "Town Shop", "A shop where you can buy items.")
            .with_shop(vec![
                health_potion().priced(40),
                mana_potion().priced(40),
                Item::new("better sword", "A better sword.").usable().priced(50),
                bomb().priced(60),
            ])
            .with_exit("north", "town_square"),
        Location::new(
            "dock",
            "Dock",
            "A wooden dock extending into the sea. From here, you can sail to other islands if you have a boat.",
        )
        .with_exit("town", "town_square"),
    ]
}

fn lokendar() -> Vec<Location> {
    vec![
        Location::new(
            "lokendar_se",
            "Lokendar - Southeast Quadrant",
            "An area with suspicious officials. Boats bob at a small pier.",
        )
        .with_npc(Npc::new(
            "Townsperson A",
            "Welcome to Lokendar, traveler. The city has seen better days.",
        ))
        .with_exit("north", "lokendar_ne")
        .with_exit("west", "lokendar_sw"),
        Location::new(
            "lokendar_sw",
            "Lokendar - Southwest Quadrant",
            "Government buildings loom here.",
        )
        .with_npc(Npc::new(
            "Townsperson B",
            "Keep your wits about you; rumors of monsters in disguise abound.",
        ))
        .with_exit("east", "lokendar_se")
        .with_exit("north", "lokendar_nw"),
        Location::new(
            "lokendar_ne",
            "Lokendar - Northeast Quadrant",
            "Shadows linger in this quadrant.",
        )
        .with_npc(Npc::new(
            "Townsperson C",
            "Nothing to see here, just going about my day.",
        ))
        .with_exit("south", "lokendar_se")
        .with_exit("west", "lokendar_nw"),
        Location::new(
            "lokendar_nw",
            "Lokendar - Northwest Quadrant",
            "The capital's center.",
        )
        .with_npc(Npc::new(
            "Townsperson D",
            "What brings you to this part of town? Looking for trouble?",
        ))
        .with_exit("east", "lokendar_ne")
        .with_exit("south", "lokendar_sw")
        .with_exit("chamber", "central_chamber"),
        Location::new(
            "central_chamber",
            "Central Chamber",
            "The central chamber of the capital.",
        )
        .with_enemy(
            Enemy::new(
                "Corruption Monster",
                "Blight of the Eternal Void",
                "A grotesque mass of writhing shadows, its form pulsating with dark tendrils and glowing red eyes.",
                80,
                30,
            )
            .with_info(
                "As it dissolves, the monster shrieks of a whirlpool where Thanatos' servant waits.",
            )
            .with_gold(40),
        )
        .with_exit("south", "lokendar_nw"),
    ]
}

fn far_isles() -> Vec<Location> {
    vec![
        Location::new(
            "spring_of_courage",
            "Spring of Courage",
            "A clear spring bubbles among white stones. A knight's ghost kneels beside it.",
        )
        .with_item(health_potion())
        .with_enemy(
            Enemy::new(
                "Fallen Knight",
                "Ghost of the Last Oath",
                "A translucent knight in cracked armor who raises his blade but does not strike.",
                1,
                0,
            )
            .with_info(
                "The knight whispers: 'Thanatos waits atop his spire. Only those who fly may reach it.'",
            )
            .with_gold(0),
        ),
        Location::new(
            "whirlpool",
            "The Whirlpool",
            "A roaring maelstrom. Your boat circles a rocky islet at its heart.",
        )
        .with_enemy(
            Enemy::new(
                "Leviathan",
                "Coil of the Drowned Deep",
                "An endless serpent of barnacled scales rising from the spinning water.",
                180,
                45,
            )
            .with_info(
                "Leviathan sinks beneath the waves, leaving behind the wreck of an airship still fit to fly.",
            )
            .with_gold(80),
        ),
        Location::new(
            "thanatos_spire",
            "Thanatos' Spire",
            "A needle of black glass piercing the clouds. The air tastes of ash.",
        )
        .with_enemy(
            Enemy::new(
                "Thanatos",
                "Herald of the Final Sleep",
                "A gaunt figure wrapped in grey wings, its face hidden behind a silver mask.",
                220,
                55,
            )
            .with_info(
                "Thanatos laughs as he falls: 'My master awaits you below.' The floor gives way.",
            )
            .with_gold(100),
        ),
        Location::new(
            "razukan_sanctum",
            "Sanctum of Razukan",
            "A vault of bone and candlelight far beneath the spire. There is no way back.",
        )
        .with_enemy(
            Enemy::new(
                "Razukan",
                "The Lich Who Returned",
                "A skeletal sorcerer crowned in green fire, the one who cursed you to sleep.",
                300,
                60,
            )
            .with_info("Razukan's phylactery shatters, and the curse of a thousand years lifts.")
            .with_gold(0),
        ),
    ]
}
