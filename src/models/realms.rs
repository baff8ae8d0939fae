//! Realm reference data
//!
//! Static table of regions, data centers and worlds offered in the profile form.

use serde::Serialize;

type DatacenterTable = &'static [(&'static str, &'static [&'static str])];

const REALMS: &[(&str, DatacenterTable)] = &[
    (
        "EU",
        &[
            (
                "Light",
                &["Phoenix", "Lich", "Odin", "Shiva", "Zodiark", "Twintania", "Raiden", "Alpha"],
            ),
            (
                "Chaos",
                &[
                    "Cerberus",
                    "Louisoix",
                    "Moogle",
                    "Omega",
                    "Ragnarok",
                    "Spriggan",
                    "Sagittarius",
                    "Phantom",
                ],
            ),
        ],
    ),
    (
        "NA",
        &[
            (
                "Aether",
                &[
                    "Gilgamesh",
                    "Sargatanas",
                    "Midgardsormr",
                    "Adamantoise",
                    "Cactuar",
                    "Faerie",
                    "Jenova",
                    "Siren",
                ],
            ),
            (
                "Primal",
                &[
                    "Behemoth", "Excalibur", "Exodus", "Famfrit", "Hyperion", "Lamia", "Leviathan",
                    "Ultros",
                ],
            ),
            (
                "Crystal",
                &[
                    "Balmung",
                    "Brynhildr",
                    "Coeurl",
                    "Diabolos",
                    "Goblin",
                    "Malboro",
                    "Mateus",
                    "Zalera",
                ],
            ),
            ("Dynamis", &["Halicarnassus", "Maduin", "Marilith", "Seraph"]),
        ],
    ),
    (
        "JP",
        &[
            (
                "Elemental",
                &[
                    "Aegis", "Atomos", "Carbuncle", "Garuda", "Gungnir", "Kujata", "Tonberry",
                    "Typhon",
                ],
            ),
            (
                "Gaia",
                &[
                    "Alexander",
                    "Bahamut",
                    "Durandal",
                    "Fenrir",
                    "Ifrit",
                    "Ridill",
                    "Tiamat",
                    "Ultima",
                ],
            ),
            (
                "Mana",
                &[
                    "Anima",
                    "Asura",
                    "Belias",
                    "Chocobo",
                    "Hades",
                    "Ixion",
                    "Mandragora",
                    "Pandaemonium",
                    "Shinryu",
                    "Titan",
                ],
            ),
            (
                "Meteor",
                &[
                    "Belias", "Ravana", "Yojimbo", "Zeromus", "Ramuh", "Unicorn", "Valefor",
                    "Anima", "Shinryu", "Titan",
                ],
            ),
        ],
    ),
    (
        "OCE",
        &[("Materia", &["Bismarck", "Ravana", "Sephirot", "Sophia", "Zurvan"])],
    ),
];

/// Response body for GET /api/ffxiv-realms
#[derive(Debug, Clone, Serialize)]
pub struct RealmData {
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub datacenters: Vec<Datacenter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Datacenter {
    pub name: &'static str,
    pub worlds: Vec<&'static str>,
}

impl RealmData {
    /// Builds the built-in realm table.
    pub fn builtin() -> Self {
        let regions = REALMS
            .iter()
            .map(|&(name, datacenters)| Region {
                name,
                datacenters: datacenters
                    .iter()
                    .map(|&(name, worlds)| Datacenter {
                        name,
                        worlds: worlds.to_vec(),
                    })
                    .collect(),
            })
            .collect();

        Self { regions }
    }
}
