// src/entity/enums.rs
//! Symbolic field values. Each serializes as its variant name.

symbolic_enum! {
    pub enum CastType { Action, Bonus, Reaction, Time, Unknown }
}

symbolic_enum! {
    /// `Caster` is the "Self" range; the keyword can't name a variant.
    pub enum RangeType { Caster = "Self", Touch, Sight, Special, Unlimited, Units, Unknown }
}

symbolic_enum! {
    pub enum Component { Verbal, Somatic, Material }
}

symbolic_enum! {
    pub enum ClassType { Artificer, Bard, Cleric, Druid, Paladin, Ranger, Sorcerer, Warlock, Wizard }
}

symbolic_enum! {
    pub enum Rarity { Common, Uncommon, Rare, VeryRare, Legendary, Artifact, Unique, Unknown }
}

symbolic_enum! {
    pub enum ItemType { Weapon, Armor, Ring, Wondrous, Potion, Scroll, Staff, Wand, Rod, Unknown }
}

symbolic_enum! {
    /// Sourcebook codes as printed in the magic item tables.
    pub enum Source {
        AI, BGDA, BOMT, BPGOG, CM, COS, CRCN, DC, DMG, DSDQ, ERLW, EGW, FTD, GGR, GOS,
        HAT, IDRF, IMR, JRC, KGV, LLK, LMP, MCV2, MOT, OOA, PBTSO, PSAIM, QIS, POA,
        ROT, SAS, SCC, SDW, SKT, TCE, TOA, TOD, TYP, VRGR, VEOR, VGM, WDH, WDMM,
        WGTE, WGE, WBW, XGE, Unknown,
    }
}

impl Source {
    pub fn title(self) -> &'static str {
        use Source::*;
        match self {
            AI => "Acquisitions Incorporated",
            BGDA => "Baldur's Gate: Descent into Avernus",
            BOMT => "The Book of Many Things",
            BPGOG => "Bigby Presents: Glory of the Giants",
            CM => "Candlekeep Mysteries",
            COS => "Curse of Strahd",
            CRCN => "Critical Role: Call of the Netherdeep",
            DC => "Divine Contention",
            DMG => "Dungeon Master's Guide",
            DSDQ => "Dragonlance: Shadow of the Dragon Queen",
            ERLW => "Eberron: Rising from the Last War",
            EGW => "Explorer's Guide to Wildemount",
            FTD => "Fizban's Treasury of Dragons",
            GGR => "Guildmaster's Guide to Ravnica",
            GOS => "Ghosts of Saltmarsh",
            HAT => "Dungeons and Dragons: Honor Among Thieves",
            IDRF => "Icewind Dale: Rime of the Frostmaiden",
            IMR => "Infernal Machine Rebuild",
            JRC => "Journeys through the Radiant Citadel",
            KGV => "Keys from the Golden Vault",
            LLK => "Lost Laboratory of Kwalish",
            LMP => "Lost Mine of Phandelver",
            MCV2 => "Monstrous Compendium Volume 2 - Dragonlance Creatures",
            MOT => "Mythic Odysseys of Theros",
            OOA => "Out of the Abyss",
            PBTSO => "Phandelver and Below: The Shattered Obelisk",
            PSAIM => "Planescape: Adventures in the Multiverse",
            QIS => "Quests from the Infinite Staircase",
            POA => "Princes of the Apocalypse",
            ROT => "The Rise of Tiamat",
            SAS => "Spelljammer: Adventures in Space",
            SCC => "Strixhaven: A Curriculum of Chaos",
            SDW => "Sleeping Dragon's Wake",
            SKT => "Storm King's Thunder",
            TCE => "Tasha's Cauldron of Everything",
            TOA => "Tomb of Annihilation",
            TOD => "Tyranny of Dragons",
            TYP => "Tales from the Yawning Portal",
            VRGR => "Van Richten's Guide to Ravenloft",
            VEOR => "Vecna: Eve of Ruin",
            VGM => "Volo's Guide to Monsters",
            WDH => "Waterdeep: Dragon Heist",
            WDMM => "Waterdeep: Dungeon of the Mad Mage",
            WGTE | WGE => "Wayfarer's Guide to Eberron",
            WBW => "The Wild Beyond the Witchlight",
            XGE => "Xanathar's Guide to Everything",
            Unknown => "Unknown",
        }
    }
}

/// Total lookup: a miss yields `fallback` and a diagnostic naming `what`.
pub fn lookup_or<T: Copy>(lookup: fn(&str) -> Option<T>, key: &str, fallback: T, what: &str) -> T {
    match lookup(key) {
        Some(v) => v,
        None => {
            log::warn!("unknown {what}: {key:?}");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(ClassType::lookup("wizard"), Some(ClassType::Wizard));
        assert_eq!(Rarity::lookup("VeryRare"), Some(Rarity::VeryRare));
        assert_eq!(Source::lookup("dmg"), Some(Source::DMG));
        assert_eq!(ClassType::lookup("Fighter"), None);
    }

    #[test]
    fn lookup_or_falls_back() {
        assert_eq!(lookup_or(Rarity::lookup, "Mythic", Rarity::Unknown, "rarity"), Rarity::Unknown);
        assert_eq!(lookup_or(ItemType::lookup, "Ring", ItemType::Unknown, "item type"), ItemType::Ring);
    }

    #[test]
    fn serializes_as_symbolic_name() {
        assert_eq!(serde_json::to_string(&CastType::Bonus).unwrap(), "\"Bonus\"");
        assert_eq!(serde_json::to_string(&Rarity::VeryRare).unwrap(), "\"VeryRare\"");
        assert_eq!(serde_json::to_string(&RangeType::Caster).unwrap(), "\"Self\"");
        assert_eq!(RangeType::lookup("self"), Some(RangeType::Caster));
        let back: Source = serde_json::from_str("\"XGE\"").unwrap();
        assert_eq!(back, Source::XGE);
        assert_eq!(Source::XGE.title(), "Xanathar's Guide to Everything");
    }
}
