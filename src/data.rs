//! Bundled guide content. The region config and every creature file are
//! compiled into the binary; a creature file belongs to the leader named by
//! its directory (`data/<region>/<leader>/<file>.json`).

use crate::error::GuideError;
use crate::model::{Creature, CreatureRecord, Region, RegionConfig};
use crate::util::{cerror, clog};
use std::rc::Rc;

const REGION_CONFIG: &str = include_str!("../data/config-region.json");

pub struct CreatureFile {
    pub region: &'static str,
    pub leader: &'static str,
    pub file: &'static str,
    pub json: &'static str,
}

macro_rules! creature_file {
    ($region:literal, $leader:literal, $file:literal) => {
        CreatureFile {
            region: $region,
            leader: $leader,
            file: $file,
            json: include_str!(concat!("../data/", $region, "/", $leader, "/", $file)),
        }
    };
}

// Kept in path order; creatures are listed in this order.
static CREATURE_FILES: &[CreatureFile] = &[
    creature_file!("hoenn", "roxanne", "nosepass.json"),
    creature_file!("johto", "whitney", "miltank.json"),
    creature_file!("kanto", "brock", "golem.json"),
    creature_file!("kanto", "brock", "onix.json"),
    creature_file!("kanto", "misty", "starmie.json"),
];

impl CreatureFile {
    pub fn stem(&self) -> &str {
        self.file.strip_suffix(".json").unwrap_or(self.file)
    }

    pub fn parse(&self) -> Result<Creature, GuideError> {
        let record: CreatureRecord =
            serde_json::from_str(self.json).map_err(|source| GuideError::CreatureFile {
                file: format!("{}/{}/{}", self.region, self.leader, self.file),
                source,
            })?;
        Ok(Creature::from_record(record, self.stem()))
    }
}

/// Data files registered for one leader, in listing order.
pub fn creature_files<'a>(
    files: &'a [CreatureFile],
    region_id: &'a str,
    leader_id: &'a str,
) -> impl Iterator<Item = &'a CreatureFile> + 'a {
    files
        .iter()
        .filter(move |f| f.region == region_id && f.leader == leader_id)
}

/// Creatures of one leader; unreadable files are logged and skipped.
pub fn load_creatures(files: &[CreatureFile], region_id: &str, leader_id: &str) -> Vec<Rc<Creature>> {
    creature_files(files, region_id, leader_id)
        .filter_map(|f| match f.parse() {
            Ok(c) => Some(Rc::new(c)),
            Err(e) => {
                cerror(&e.to_string());
                None
            }
        })
        .collect()
}

pub fn load_catalog(config: &str, files: &[CreatureFile]) -> Result<Vec<Region>, GuideError> {
    let cfg: RegionConfig = serde_json::from_str(config).map_err(GuideError::Config)?;
    let mut regions = cfg.regions;
    for region in &mut regions {
        for leader in &mut region.leaders {
            leader.creatures = load_creatures(files, &region.id, &leader.id);
        }
    }
    Ok(regions)
}

/// Everything the guide shows. A broken config leaves the guide empty.
pub fn load_regions() -> Vec<Region> {
    match load_catalog(REGION_CONFIG, CREATURE_FILES) {
        Ok(regions) => {
            let creatures: usize = regions
                .iter()
                .flat_map(|r| &r.leaders)
                .map(|l| l.creatures.len())
                .sum();
            clog(&format!("loaded {} regions, {} creatures", regions.len(), creatures));
            regions
        }
        Err(e) => {
            cerror(&e.to_string());
            Vec::new()
        }
    }
}
