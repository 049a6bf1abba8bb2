use serde::Serialize;

/// A suggested disease for the report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Disease {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub static COMMON_DISEASES: [Disease; 8] = [
    Disease {
        id: "covid19",
        name: "COVID-19",
        description: "Viral respiratory illness",
    },
    Disease {
        id: "dengue",
        name: "Dengue",
        description: "Mosquito-borne viral infection",
    },
    Disease {
        id: "malaria",
        name: "Malaria",
        description: "Parasitic infection spread by mosquitoes",
    },
    Disease {
        id: "tuberculosis",
        name: "Tuberculosis",
        description: "Bacterial infection affecting lungs",
    },
    Disease {
        id: "cholera",
        name: "Cholera",
        description: "Bacterial infection causing severe diarrhea",
    },
    Disease {
        id: "influenza",
        name: "Influenza",
        description: "Seasonal flu virus",
    },
    Disease {
        id: "typhoid",
        name: "Typhoid",
        description: "Bacterial infection from contaminated food/water",
    },
    Disease {
        id: "zika",
        name: "Zika Virus",
        description: "Mosquito-borne viral disease",
    },
];
