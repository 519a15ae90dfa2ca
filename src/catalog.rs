//! Closed mapping tables from marketplace names to backend identifiers.
//!
//! The backend addresses categories, sort orders and administrative areas by
//! opaque identifiers. Each table here is an explicit enumeration with a
//! tolerant `from_name` lookup: unknown names resolve to a documented
//! default instead of failing, matching the policy applied at the API
//! boundary.

/// Marketplace category with its stable backend identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    ToutesCategories,
    Vehicules,
    Voitures,
    Motos,
    Caravaning,
    Utilitaires,
    EquipementAuto,
    EquipementMoto,
    Immobilier,
    VentesImmobilieres,
    Locations,
    Colocations,
    BureauxCommerces,
    Multimedia,
    Informatique,
    ImageSon,
    Telephonie,
    Maison,
    Ameublement,
    Electromenager,
    Emploi,
}

impl Category {
    /// All categories, in backend-id order.
    pub const ALL: &'static [Category] = &[
        Category::ToutesCategories,
        Category::Vehicules,
        Category::Voitures,
        Category::Motos,
        Category::Caravaning,
        Category::Utilitaires,
        Category::EquipementAuto,
        Category::EquipementMoto,
        Category::Immobilier,
        Category::VentesImmobilieres,
        Category::Locations,
        Category::Colocations,
        Category::BureauxCommerces,
        Category::Multimedia,
        Category::Informatique,
        Category::ImageSon,
        Category::Telephonie,
        Category::Maison,
        Category::Ameublement,
        Category::Electromenager,
        Category::Emploi,
    ];

    /// Returns the backend identifier sent in `filters.category.id`.
    pub fn id(&self) -> &'static str {
        match self {
            Category::ToutesCategories => "0",
            Category::Vehicules => "1",
            Category::Voitures => "2",
            Category::Motos => "3",
            Category::Caravaning => "4",
            Category::Utilitaires => "5",
            Category::EquipementAuto => "6",
            Category::EquipementMoto => "7",
            Category::Immobilier => "8",
            Category::VentesImmobilieres => "9",
            Category::Locations => "10",
            Category::Colocations => "11",
            Category::BureauxCommerces => "12",
            Category::Multimedia => "14",
            Category::Informatique => "15",
            Category::ImageSon => "16",
            Category::Telephonie => "17",
            Category::Maison => "19",
            Category::Ameublement => "20",
            Category::Electromenager => "21",
            Category::Emploi => "71",
        }
    }

    /// Returns the canonical upper-snake name used at the API boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Category::ToutesCategories => "TOUTES_CATEGORIES",
            Category::Vehicules => "VEHICULES",
            Category::Voitures => "VOITURES",
            Category::Motos => "MOTOS",
            Category::Caravaning => "CARAVANING",
            Category::Utilitaires => "UTILITAIRES",
            Category::EquipementAuto => "EQUIPEMENT_AUTO",
            Category::EquipementMoto => "EQUIPEMENT_MOTO",
            Category::Immobilier => "IMMOBILIER",
            Category::VentesImmobilieres => "VENTES_IMMOBILIERES",
            Category::Locations => "LOCATIONS",
            Category::Colocations => "COLOCATIONS",
            Category::BureauxCommerces => "BUREAUX_COMMERCES",
            Category::Multimedia => "MULTIMEDIA",
            Category::Informatique => "INFORMATIQUE",
            Category::ImageSon => "IMAGE_SON",
            Category::Telephonie => "TELEPHONIE",
            Category::Maison => "MAISON",
            Category::Ameublement => "AMEUBLEMENT",
            Category::Electromenager => "ELECTROMENAGER",
            Category::Emploi => "EMPLOI",
        }
    }

    /// Tolerant name lookup. Unknown names fall back to all-categories.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_uppercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == normalized)
            .unwrap_or_default()
    }
}

/// Sort key and direction understood by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    #[default]
    Relevance,
    Newest,
    Oldest,
    Cheapest,
    MostExpensive,
}

impl Sort {
    /// All sort options.
    pub const ALL: &'static [Sort] = &[
        Sort::Relevance,
        Sort::Newest,
        Sort::Oldest,
        Sort::Cheapest,
        Sort::MostExpensive,
    ];

    /// Returns the `sort_by` wire value.
    pub fn key(&self) -> &'static str {
        match self {
            Sort::Relevance => "relevance",
            Sort::Newest | Sort::Oldest => "time",
            Sort::Cheapest | Sort::MostExpensive => "price",
        }
    }

    /// Returns the `sort_order` wire value. Relevance carries no direction.
    pub fn order(&self) -> Option<&'static str> {
        match self {
            Sort::Relevance => None,
            Sort::Newest => Some("desc"),
            Sort::Oldest => Some("asc"),
            // The backend swaps these relative to what the labels suggest.
            Sort::Cheapest => Some("desc"),
            Sort::MostExpensive => Some("asc"),
        }
    }

    /// Returns the canonical upper-snake name used at the API boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Sort::Relevance => "RELEVANCE",
            Sort::Newest => "NEWEST",
            Sort::Oldest => "OLDEST",
            Sort::Cheapest => "CHEAPEST",
            Sort::MostExpensive => "MOST_EXPENSIVE",
        }
    }

    /// Tolerant name lookup. Unknown names fall back to relevance.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_uppercase();
        Sort::ALL
            .iter()
            .copied()
            .find(|s| s.name() == normalized)
            .unwrap_or_default()
    }
}

/// Whether an ad offers or requests the listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdType {
    #[default]
    Offer,
    Demand,
}

impl AdType {
    /// All ad types.
    pub const ALL: &'static [AdType] = &[AdType::Offer, AdType::Demand];

    /// Returns the wire value sent in `filters.enums.ad_type`.
    pub fn value(&self) -> &'static str {
        match self {
            AdType::Offer => "offer",
            AdType::Demand => "demand",
        }
    }

    /// Returns the canonical upper-snake name used at the API boundary.
    pub fn name(&self) -> &'static str {
        match self {
            AdType::Offer => "OFFER",
            AdType::Demand => "DEMAND",
        }
    }

    /// Tolerant name lookup. Unknown names fall back to offers.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_uppercase();
        AdType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == normalized)
            .unwrap_or_default()
    }
}

/// Seller kind filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerType {
    All,
    Pro,
    Private,
}

impl OwnerType {
    /// All owner types.
    pub const ALL_KINDS: &'static [OwnerType] =
        &[OwnerType::All, OwnerType::Pro, OwnerType::Private];

    /// Returns the `owner_type` wire value.
    pub fn value(&self) -> &'static str {
        match self {
            OwnerType::All => "all",
            OwnerType::Pro => "pro",
            OwnerType::Private => "private",
        }
    }

    /// Returns the canonical upper-snake name used at the API boundary.
    pub fn name(&self) -> &'static str {
        match self {
            OwnerType::All => "ALL",
            OwnerType::Pro => "PRO",
            OwnerType::Private => "PRIVATE",
        }
    }

    /// Tolerant name lookup. Unknown names leave the filter unset.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_uppercase();
        OwnerType::ALL_KINDS
            .iter()
            .copied()
            .find(|o| o.name() == normalized)
    }
}

/// Administrative region, identified by the backend's legacy region ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Alsace,
    Aquitaine,
    Auvergne,
    BasseNormandie,
    Bourgogne,
    Bretagne,
    Centre,
    ChampagneArdenne,
    Corse,
    FrancheComte,
    HauteNormandie,
    IleDeFrance,
    LanguedocRoussillon,
    Limousin,
    Lorraine,
    MidiPyrenees,
    NordPasDeCalais,
    PaysDeLaLoire,
    Picardie,
    PoitouCharentes,
    ProvenceAlpesCoteDAzur,
    RhoneAlpes,
    Guadeloupe,
    Martinique,
    Guyane,
    Reunion,
    Mayotte,
}

impl Region {
    /// All regions, in backend-id order.
    pub const ALL: &'static [Region] = &[
        Region::Alsace,
        Region::Aquitaine,
        Region::Auvergne,
        Region::BasseNormandie,
        Region::Bourgogne,
        Region::Bretagne,
        Region::Centre,
        Region::ChampagneArdenne,
        Region::Corse,
        Region::FrancheComte,
        Region::HauteNormandie,
        Region::IleDeFrance,
        Region::LanguedocRoussillon,
        Region::Limousin,
        Region::Lorraine,
        Region::MidiPyrenees,
        Region::NordPasDeCalais,
        Region::PaysDeLaLoire,
        Region::Picardie,
        Region::PoitouCharentes,
        Region::ProvenceAlpesCoteDAzur,
        Region::RhoneAlpes,
        Region::Guadeloupe,
        Region::Martinique,
        Region::Guyane,
        Region::Reunion,
        Region::Mayotte,
    ];

    /// Returns the backend region identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Region::Alsace => "1",
            Region::Aquitaine => "2",
            Region::Auvergne => "3",
            Region::BasseNormandie => "4",
            Region::Bourgogne => "5",
            Region::Bretagne => "6",
            Region::Centre => "7",
            Region::ChampagneArdenne => "8",
            Region::Corse => "9",
            Region::FrancheComte => "10",
            Region::HauteNormandie => "11",
            Region::IleDeFrance => "12",
            Region::LanguedocRoussillon => "13",
            Region::Limousin => "14",
            Region::Lorraine => "15",
            Region::MidiPyrenees => "16",
            Region::NordPasDeCalais => "17",
            Region::PaysDeLaLoire => "18",
            Region::Picardie => "19",
            Region::PoitouCharentes => "20",
            Region::ProvenceAlpesCoteDAzur => "21",
            Region::RhoneAlpes => "22",
            Region::Guadeloupe => "23",
            Region::Martinique => "24",
            Region::Guyane => "25",
            Region::Reunion => "26",
            Region::Mayotte => "27",
        }
    }

    /// Returns the canonical upper-snake name used at the API boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Alsace => "ALSACE",
            Region::Aquitaine => "AQUITAINE",
            Region::Auvergne => "AUVERGNE",
            Region::BasseNormandie => "BASSE_NORMANDIE",
            Region::Bourgogne => "BOURGOGNE",
            Region::Bretagne => "BRETAGNE",
            Region::Centre => "CENTRE",
            Region::ChampagneArdenne => "CHAMPAGNE_ARDENNE",
            Region::Corse => "CORSE",
            Region::FrancheComte => "FRANCHE_COMTE",
            Region::HauteNormandie => "HAUTE_NORMANDIE",
            Region::IleDeFrance => "ILE_DE_FRANCE",
            Region::LanguedocRoussillon => "LANGUEDOC_ROUSSILLON",
            Region::Limousin => "LIMOUSIN",
            Region::Lorraine => "LORRAINE",
            Region::MidiPyrenees => "MIDI_PYRENEES",
            Region::NordPasDeCalais => "NORD_PAS_DE_CALAIS",
            Region::PaysDeLaLoire => "PAYS_DE_LA_LOIRE",
            Region::Picardie => "PICARDIE",
            Region::PoitouCharentes => "POITOU_CHARENTES",
            Region::ProvenceAlpesCoteDAzur => "PROVENCE_ALPES_COTE_D_AZUR",
            Region::RhoneAlpes => "RHONE_ALPES",
            Region::Guadeloupe => "GUADELOUPE",
            Region::Martinique => "MARTINIQUE",
            Region::Guyane => "GUYANE",
            Region::Reunion => "REUNION",
            Region::Mayotte => "MAYOTTE",
        }
    }

    /// Strict name lookup; regions have no meaningful default.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_uppercase();
        Region::ALL.iter().copied().find(|r| r.name() == normalized)
    }
}

/// Administrative department, tied to its parent [`Region`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Ain,
    Aisne,
    Allier,
    AlpesDeHauteProvence,
    HautesAlpes,
    AlpesMaritimes,
    Ardeche,
    Ardennes,
    Ariege,
    Aube,
    Aude,
    Aveyron,
    BouchesDuRhone,
    Calvados,
    Cantal,
    Charente,
    CharenteMaritime,
    Cher,
    Correze,
    CorseDuSud,
    HauteCorse,
    CoteDOr,
    CotesDArmor,
    Creuse,
    Dordogne,
    Doubs,
    Drome,
    Eure,
    EureEtLoir,
    Finistere,
    Gard,
    HauteGaronne,
    Gers,
    Gironde,
    Herault,
    IlleEtVilaine,
    Indre,
    IndreEtLoire,
    Isere,
    Jura,
    Landes,
    LoirEtCher,
    Loire,
    HauteLoire,
    LoireAtlantique,
    Loiret,
    Lot,
    LotEtGaronne,
    Lozere,
    MaineEtLoire,
    Manche,
    Marne,
    HauteMarne,
    Mayenne,
    MeurtheEtMoselle,
    Meuse,
    Morbihan,
    Moselle,
    Nievre,
    Nord,
    Oise,
    Orne,
    PasDeCalais,
    PuyDeDome,
    PyreneesAtlantiques,
    HautesPyrenees,
    PyreneesOrientales,
    BasRhin,
    HautRhin,
    Rhone,
    HauteSaone,
    SaoneEtLoire,
    Sarthe,
    Savoie,
    HauteSavoie,
    Paris,
    SeineMaritime,
    SeineEtMarne,
    Yvelines,
    DeuxSevres,
    Somme,
    Tarn,
    TarnEtGaronne,
    Var,
    Vaucluse,
    Vendee,
    Vienne,
    HauteVienne,
    Vosges,
    Yonne,
    TerritoireDeBelfort,
    Essonne,
    HautsDeSeine,
    SeineSaintDenis,
    ValDeMarne,
    ValDOise,
    Guadeloupe,
    Martinique,
    Guyane,
    Reunion,
    Mayotte,
}

impl Department {
    /// All departments, in backend-id order.
    pub const ALL: &'static [Department] = &[
        Department::Ain,
        Department::Aisne,
        Department::Allier,
        Department::AlpesDeHauteProvence,
        Department::HautesAlpes,
        Department::AlpesMaritimes,
        Department::Ardeche,
        Department::Ardennes,
        Department::Ariege,
        Department::Aube,
        Department::Aude,
        Department::Aveyron,
        Department::BouchesDuRhone,
        Department::Calvados,
        Department::Cantal,
        Department::Charente,
        Department::CharenteMaritime,
        Department::Cher,
        Department::Correze,
        Department::CorseDuSud,
        Department::HauteCorse,
        Department::CoteDOr,
        Department::CotesDArmor,
        Department::Creuse,
        Department::Dordogne,
        Department::Doubs,
        Department::Drome,
        Department::Eure,
        Department::EureEtLoir,
        Department::Finistere,
        Department::Gard,
        Department::HauteGaronne,
        Department::Gers,
        Department::Gironde,
        Department::Herault,
        Department::IlleEtVilaine,
        Department::Indre,
        Department::IndreEtLoire,
        Department::Isere,
        Department::Jura,
        Department::Landes,
        Department::LoirEtCher,
        Department::Loire,
        Department::HauteLoire,
        Department::LoireAtlantique,
        Department::Loiret,
        Department::Lot,
        Department::LotEtGaronne,
        Department::Lozere,
        Department::MaineEtLoire,
        Department::Manche,
        Department::Marne,
        Department::HauteMarne,
        Department::Mayenne,
        Department::MeurtheEtMoselle,
        Department::Meuse,
        Department::Morbihan,
        Department::Moselle,
        Department::Nievre,
        Department::Nord,
        Department::Oise,
        Department::Orne,
        Department::PasDeCalais,
        Department::PuyDeDome,
        Department::PyreneesAtlantiques,
        Department::HautesPyrenees,
        Department::PyreneesOrientales,
        Department::BasRhin,
        Department::HautRhin,
        Department::Rhone,
        Department::HauteSaone,
        Department::SaoneEtLoire,
        Department::Sarthe,
        Department::Savoie,
        Department::HauteSavoie,
        Department::Paris,
        Department::SeineMaritime,
        Department::SeineEtMarne,
        Department::Yvelines,
        Department::DeuxSevres,
        Department::Somme,
        Department::Tarn,
        Department::TarnEtGaronne,
        Department::Var,
        Department::Vaucluse,
        Department::Vendee,
        Department::Vienne,
        Department::HauteVienne,
        Department::Vosges,
        Department::Yonne,
        Department::TerritoireDeBelfort,
        Department::Essonne,
        Department::HautsDeSeine,
        Department::SeineSaintDenis,
        Department::ValDeMarne,
        Department::ValDOise,
        Department::Guadeloupe,
        Department::Martinique,
        Department::Guyane,
        Department::Reunion,
        Department::Mayotte,
    ];

    /// Returns (department id, parent region, canonical name).
    fn info(&self) -> (&'static str, Region, &'static str) {
        match self {
            Department::Ain => ("01", Region::RhoneAlpes, "AIN"),
            Department::Aisne => ("02", Region::Picardie, "AISNE"),
            Department::Allier => ("03", Region::Auvergne, "ALLIER"),
            Department::AlpesDeHauteProvence => {
                ("04", Region::ProvenceAlpesCoteDAzur, "ALPES_DE_HAUTE_PROVENCE")
            }
            Department::HautesAlpes => ("05", Region::ProvenceAlpesCoteDAzur, "HAUTES_ALPES"),
            Department::AlpesMaritimes => ("06", Region::ProvenceAlpesCoteDAzur, "ALPES_MARITIMES"),
            Department::Ardeche => ("07", Region::RhoneAlpes, "ARDECHE"),
            Department::Ardennes => ("08", Region::ChampagneArdenne, "ARDENNES"),
            Department::Ariege => ("09", Region::MidiPyrenees, "ARIEGE"),
            Department::Aube => ("10", Region::ChampagneArdenne, "AUBE"),
            Department::Aude => ("11", Region::LanguedocRoussillon, "AUDE"),
            Department::Aveyron => ("12", Region::MidiPyrenees, "AVEYRON"),
            Department::BouchesDuRhone => ("13", Region::ProvenceAlpesCoteDAzur, "BOUCHES_DU_RHONE"),
            Department::Calvados => ("14", Region::BasseNormandie, "CALVADOS"),
            Department::Cantal => ("15", Region::Auvergne, "CANTAL"),
            Department::Charente => ("16", Region::PoitouCharentes, "CHARENTE"),
            Department::CharenteMaritime => ("17", Region::PoitouCharentes, "CHARENTE_MARITIME"),
            Department::Cher => ("18", Region::Centre, "CHER"),
            Department::Correze => ("19", Region::Limousin, "CORREZE"),
            Department::CorseDuSud => ("2A", Region::Corse, "CORSE_DU_SUD"),
            Department::HauteCorse => ("2B", Region::Corse, "HAUTE_CORSE"),
            Department::CoteDOr => ("21", Region::Bourgogne, "COTE_D_OR"),
            Department::CotesDArmor => ("22", Region::Bretagne, "COTES_D_ARMOR"),
            Department::Creuse => ("23", Region::Limousin, "CREUSE"),
            Department::Dordogne => ("24", Region::Aquitaine, "DORDOGNE"),
            Department::Doubs => ("25", Region::FrancheComte, "DOUBS"),
            Department::Drome => ("26", Region::RhoneAlpes, "DROME"),
            Department::Eure => ("27", Region::HauteNormandie, "EURE"),
            Department::EureEtLoir => ("28", Region::Centre, "EURE_ET_LOIR"),
            Department::Finistere => ("29", Region::Bretagne, "FINISTERE"),
            Department::Gard => ("30", Region::LanguedocRoussillon, "GARD"),
            Department::HauteGaronne => ("31", Region::MidiPyrenees, "HAUTE_GARONNE"),
            Department::Gers => ("32", Region::MidiPyrenees, "GERS"),
            Department::Gironde => ("33", Region::Aquitaine, "GIRONDE"),
            Department::Herault => ("34", Region::LanguedocRoussillon, "HERAULT"),
            Department::IlleEtVilaine => ("35", Region::Bretagne, "ILLE_ET_VILAINE"),
            Department::Indre => ("36", Region::Centre, "INDRE"),
            Department::IndreEtLoire => ("37", Region::Centre, "INDRE_ET_LOIRE"),
            Department::Isere => ("38", Region::RhoneAlpes, "ISERE"),
            Department::Jura => ("39", Region::FrancheComte, "JURA"),
            Department::Landes => ("40", Region::Aquitaine, "LANDES"),
            Department::LoirEtCher => ("41", Region::Centre, "LOIR_ET_CHER"),
            Department::Loire => ("42", Region::RhoneAlpes, "LOIRE"),
            Department::HauteLoire => ("43", Region::Auvergne, "HAUTE_LOIRE"),
            Department::LoireAtlantique => ("44", Region::PaysDeLaLoire, "LOIRE_ATLANTIQUE"),
            Department::Loiret => ("45", Region::Centre, "LOIRET"),
            Department::Lot => ("46", Region::MidiPyrenees, "LOT"),
            Department::LotEtGaronne => ("47", Region::Aquitaine, "LOT_ET_GARONNE"),
            Department::Lozere => ("48", Region::LanguedocRoussillon, "LOZERE"),
            Department::MaineEtLoire => ("49", Region::PaysDeLaLoire, "MAINE_ET_LOIRE"),
            Department::Manche => ("50", Region::BasseNormandie, "MANCHE"),
            Department::Marne => ("51", Region::ChampagneArdenne, "MARNE"),
            Department::HauteMarne => ("52", Region::ChampagneArdenne, "HAUTE_MARNE"),
            Department::Mayenne => ("53", Region::PaysDeLaLoire, "MAYENNE"),
            Department::MeurtheEtMoselle => ("54", Region::Lorraine, "MEURTHE_ET_MOSELLE"),
            Department::Meuse => ("55", Region::Lorraine, "MEUSE"),
            Department::Morbihan => ("56", Region::Bretagne, "MORBIHAN"),
            Department::Moselle => ("57", Region::Lorraine, "MOSELLE"),
            Department::Nievre => ("58", Region::Bourgogne, "NIEVRE"),
            Department::Nord => ("59", Region::NordPasDeCalais, "NORD"),
            Department::Oise => ("60", Region::Picardie, "OISE"),
            Department::Orne => ("61", Region::BasseNormandie, "ORNE"),
            Department::PasDeCalais => ("62", Region::NordPasDeCalais, "PAS_DE_CALAIS"),
            Department::PuyDeDome => ("63", Region::Auvergne, "PUY_DE_DOME"),
            Department::PyreneesAtlantiques => ("64", Region::Aquitaine, "PYRENEES_ATLANTIQUES"),
            Department::HautesPyrenees => ("65", Region::MidiPyrenees, "HAUTES_PYRENEES"),
            Department::PyreneesOrientales => {
                ("66", Region::LanguedocRoussillon, "PYRENEES_ORIENTALES")
            }
            Department::BasRhin => ("67", Region::Alsace, "BAS_RHIN"),
            Department::HautRhin => ("68", Region::Alsace, "HAUT_RHIN"),
            Department::Rhone => ("69", Region::RhoneAlpes, "RHONE"),
            Department::HauteSaone => ("70", Region::FrancheComte, "HAUTE_SAONE"),
            Department::SaoneEtLoire => ("71", Region::Bourgogne, "SAONE_ET_LOIRE"),
            Department::Sarthe => ("72", Region::PaysDeLaLoire, "SARTHE"),
            Department::Savoie => ("73", Region::RhoneAlpes, "SAVOIE"),
            Department::HauteSavoie => ("74", Region::RhoneAlpes, "HAUTE_SAVOIE"),
            Department::Paris => ("75", Region::IleDeFrance, "PARIS"),
            Department::SeineMaritime => ("76", Region::HauteNormandie, "SEINE_MARITIME"),
            Department::SeineEtMarne => ("77", Region::IleDeFrance, "SEINE_ET_MARNE"),
            Department::Yvelines => ("78", Region::IleDeFrance, "YVELINES"),
            Department::DeuxSevres => ("79", Region::PoitouCharentes, "DEUX_SEVRES"),
            Department::Somme => ("80", Region::Picardie, "SOMME"),
            Department::Tarn => ("81", Region::MidiPyrenees, "TARN"),
            Department::TarnEtGaronne => ("82", Region::MidiPyrenees, "TARN_ET_GARONNE"),
            Department::Var => ("83", Region::ProvenceAlpesCoteDAzur, "VAR"),
            Department::Vaucluse => ("84", Region::ProvenceAlpesCoteDAzur, "VAUCLUSE"),
            Department::Vendee => ("85", Region::PaysDeLaLoire, "VENDEE"),
            Department::Vienne => ("86", Region::PoitouCharentes, "VIENNE"),
            Department::HauteVienne => ("87", Region::Limousin, "HAUTE_VIENNE"),
            Department::Vosges => ("88", Region::Lorraine, "VOSGES"),
            Department::Yonne => ("89", Region::Bourgogne, "YONNE"),
            Department::TerritoireDeBelfort => {
                ("90", Region::FrancheComte, "TERRITOIRE_DE_BELFORT")
            }
            Department::Essonne => ("91", Region::IleDeFrance, "ESSONNE"),
            Department::HautsDeSeine => ("92", Region::IleDeFrance, "HAUTS_DE_SEINE"),
            Department::SeineSaintDenis => ("93", Region::IleDeFrance, "SEINE_SAINT_DENIS"),
            Department::ValDeMarne => ("94", Region::IleDeFrance, "VAL_DE_MARNE"),
            Department::ValDOise => ("95", Region::IleDeFrance, "VAL_D_OISE"),
            Department::Guadeloupe => ("971", Region::Guadeloupe, "GUADELOUPE"),
            Department::Martinique => ("972", Region::Martinique, "MARTINIQUE"),
            Department::Guyane => ("973", Region::Guyane, "GUYANE"),
            Department::Reunion => ("974", Region::Reunion, "REUNION"),
            Department::Mayotte => ("976", Region::Mayotte, "MAYOTTE"),
        }
    }

    /// Returns the backend department identifier.
    pub fn id(&self) -> &'static str {
        self.info().0
    }

    /// Returns the parent region.
    pub fn region(&self) -> Region {
        self.info().1
    }

    /// Returns the canonical upper-snake name used at the API boundary.
    pub fn name(&self) -> &'static str {
        self.info().2
    }

    /// Strict name lookup; departments have no meaningful default.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_uppercase();
        Department::ALL
            .iter()
            .copied()
            .find(|d| d.name() == normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids() {
        assert_eq!(Category::ToutesCategories.id(), "0");
        assert_eq!(Category::Vehicules.id(), "1");
        assert_eq!(Category::Immobilier.id(), "8");
        assert_eq!(Category::VentesImmobilieres.id(), "9");
    }

    #[test]
    fn test_category_default() {
        assert_eq!(Category::default(), Category::ToutesCategories);
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(Category::from_name("IMMOBILIER"), Category::Immobilier);
        assert_eq!(Category::from_name("immobilier"), Category::Immobilier);
        assert_eq!(Category::from_name(" Vehicules "), Category::Vehicules);
    }

    #[test]
    fn test_category_from_unknown_name_falls_back() {
        assert_eq!(Category::from_name("NOPE"), Category::ToutesCategories);
        assert_eq!(Category::from_name(""), Category::ToutesCategories);
    }

    #[test]
    fn test_category_ids_are_unique() {
        let mut ids: Vec<_> = Category::ALL.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Category::ALL.len());
    }

    #[test]
    fn test_sort_wire_values() {
        assert_eq!(Sort::Relevance.key(), "relevance");
        assert_eq!(Sort::Relevance.order(), None);
        assert_eq!(Sort::Newest.key(), "time");
        assert_eq!(Sort::Newest.order(), Some("desc"));
        assert_eq!(Sort::Oldest.order(), Some("asc"));
        assert_eq!(Sort::Cheapest.key(), "price");
        assert_eq!(Sort::Cheapest.order(), Some("desc"));
    }

    #[test]
    fn test_sort_from_name() {
        assert_eq!(Sort::from_name("NEWEST"), Sort::Newest);
        assert_eq!(Sort::from_name("cheapest"), Sort::Cheapest);
        assert_eq!(Sort::from_name("whatever"), Sort::Relevance);
    }

    #[test]
    fn test_ad_type_values() {
        assert_eq!(AdType::Offer.value(), "offer");
        assert_eq!(AdType::Demand.value(), "demand");
        assert_eq!(AdType::from_name("DEMAND"), AdType::Demand);
        assert_eq!(AdType::from_name("unknown"), AdType::Offer);
    }

    #[test]
    fn test_owner_type_values() {
        assert_eq!(OwnerType::All.value(), "all");
        assert_eq!(OwnerType::Pro.value(), "pro");
        assert_eq!(OwnerType::Private.value(), "private");
    }

    #[test]
    fn test_owner_type_from_name_is_optional() {
        assert_eq!(OwnerType::from_name("PRO"), Some(OwnerType::Pro));
        assert_eq!(OwnerType::from_name("nope"), None);
    }

    #[test]
    fn test_region_ids() {
        assert_eq!(Region::IleDeFrance.id(), "12");
        assert_eq!(Region::Alsace.id(), "1");
        assert_eq!(Region::Mayotte.id(), "27");
    }

    #[test]
    fn test_region_from_name() {
        assert_eq!(Region::from_name("ILE_DE_FRANCE"), Some(Region::IleDeFrance));
        assert_eq!(Region::from_name("ile_de_france"), Some(Region::IleDeFrance));
        assert_eq!(Region::from_name("ATLANTIS"), None);
    }

    #[test]
    fn test_department_paris() {
        assert_eq!(Department::Paris.id(), "75");
        assert_eq!(Department::Paris.region(), Region::IleDeFrance);
        assert_eq!(Department::Paris.region().id(), "12");
        assert_eq!(Department::Paris.name(), "PARIS");
    }

    #[test]
    fn test_department_from_name() {
        assert_eq!(Department::from_name("PARIS"), Some(Department::Paris));
        assert_eq!(Department::from_name("paris"), Some(Department::Paris));
        assert_eq!(Department::from_name("GOTHAM"), None);
    }

    #[test]
    fn test_department_ids_are_unique() {
        let mut ids: Vec<_> = Department::ALL.iter().map(|d| d.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Department::ALL.len());
    }

    #[test]
    fn test_department_leading_zero_ids() {
        assert_eq!(Department::Ain.id(), "01");
        assert_eq!(Department::Ariege.id(), "09");
    }

    #[test]
    fn test_corsica_departments() {
        assert_eq!(Department::CorseDuSud.id(), "2A");
        assert_eq!(Department::HauteCorse.id(), "2B");
        assert_eq!(Department::CorseDuSud.region(), Region::Corse);
    }

    #[test]
    fn test_every_department_region_is_listed() {
        for dept in Department::ALL {
            assert!(Region::ALL.contains(&dept.region()), "{:?}", dept);
        }
    }
}
