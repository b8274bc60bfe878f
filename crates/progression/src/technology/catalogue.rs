//! The stock research tree shipped with a new game.

use super::types::{Technology, TechnologyCategory as Cat};

/// All 22 stock technologies with their prerequisite edges.
///
/// `unlocks_technologies` is filled in from the prerequisite edges, so each
/// node lists the technologies that name it as a prerequisite.
pub fn standard_catalogue() -> Vec<Technology> {
    let mut technologies = vec![
        // Infrastructure
        Technology::new(
            "basic_construction",
            "Basic Construction",
            "Improved building techniques raise construction efficiency",
            Cat::Infrastructure,
            500,
            3,
        )
        .with_effects(&[
            ("construction_cost_reduction", 0.1),
            ("building_efficiency", 0.05),
        ])
        .unlocks(&["improved_house"]),
        Technology::new(
            "road_engineering",
            "Road Engineering",
            "Advanced techniques for roads, bridges and transport infrastructure",
            Cat::Infrastructure,
            800,
            4,
        )
        .requires(&["basic_construction"])
        .with_effects(&[("traffic_efficiency", 0.2), ("transport_cost_reduction", 0.15)])
        .unlocks(&["highway", "bridge"]),
        Technology::new(
            "urban_planning",
            "Urban Planning",
            "Efficient planning of urban space and land use",
            Cat::Infrastructure,
            1200,
            5,
        )
        .requires(&["road_engineering"])
        .with_effects(&[("city_efficiency", 0.1), ("happiness_bonus", 0.05)])
        .unlocks(&["city_center", "plaza"]),
        // Economy
        Technology::new(
            "basic_economics",
            "Basic Economics",
            "Better understanding of economic mechanisms and public finance",
            Cat::Economy,
            600,
            3,
        )
        .with_effects(&[("tax_efficiency", 0.1), ("trade_bonus", 0.05)])
        .unlocks(&["bank"]),
        Technology::new(
            "banking",
            "Banking",
            "A banking system increases the flow of capital in the city",
            Cat::Economy,
            1000,
            4,
        )
        .requires(&["basic_economics"])
        .with_effects(&[("interest_rate_reduction", 0.2), ("loan_capacity", 0.3)])
        .unlocks(&["central_bank", "stock_exchange"]),
        Technology::new(
            "industrialization",
            "Industrialization",
            "Heavy industry raises output and creates jobs",
            Cat::Economy,
            1500,
            6,
        )
        .requires(&["banking", "basic_construction"])
        .with_effects(&[("industrial_efficiency", 0.25), ("job_creation", 0.2)])
        .unlocks(&["steel_mill", "chemical_plant"]),
        // Social
        Technology::new(
            "public_education",
            "Public Education",
            "Universal education for every resident",
            Cat::Social,
            800,
            4,
        )
        .with_effects(&[("education_efficiency", 0.2), ("research_speed", 0.1)])
        .unlocks(&["public_school", "library"]),
        Technology::new(
            "healthcare_system",
            "Healthcare System",
            "Organized medical care improves public health",
            Cat::Social,
            1000,
            5,
        )
        .requires(&["public_education"])
        .with_effects(&[("health_efficiency", 0.25), ("population_growth", 0.1)])
        .unlocks(&["clinic", "pharmacy"]),
        Technology::new(
            "social_services",
            "Social Services",
            "Comprehensive support for residents in need",
            Cat::Social,
            1200,
            5,
        )
        .requires(&["healthcare_system"])
        .with_effects(&[("happiness_bonus", 0.15), ("crime_reduction", 0.1)])
        .unlocks(&["social_center", "elderly_home"]),
        // Environment
        Technology::new(
            "environmental_awareness",
            "Environmental Awareness",
            "Basic knowledge of environmental protection and sustainability",
            Cat::Environment,
            700,
            3,
        )
        .with_effects(&[("pollution_reduction", 0.1), ("green_bonus", 0.05)])
        .unlocks(&["recycling_center"]),
        Technology::new(
            "renewable_energy",
            "Renewable Energy",
            "Clean energy from solar panels and wind turbines",
            Cat::Environment,
            1500,
            6,
        )
        .requires(&["environmental_awareness", "basic_construction"])
        .with_effects(&[("energy_efficiency", 0.3), ("pollution_reduction", 0.2)])
        .unlocks(&["solar_plant", "wind_farm"]),
        Technology::new(
            "green_technology",
            "Green Technology",
            "Advanced ecological technology and sustainable construction",
            Cat::Environment,
            2000,
            8,
        )
        .requires(&["renewable_energy"])
        .with_effects(&[("eco_efficiency", 0.25), ("sustainability_bonus", 0.2)])
        .unlocks(&["eco_district", "green_skyscraper"]),
        // Science
        Technology::new(
            "scientific_method",
            "Scientific Method",
            "A systematic approach to research",
            Cat::Science,
            1000,
            4,
        )
        .requires(&["public_education"])
        .with_effects(&[("research_speed", 0.2), ("technology_cost_reduction", 0.1)])
        .unlocks(&["research_lab"]),
        Technology::new(
            "advanced_materials",
            "Advanced Materials",
            "New construction and industrial materials",
            Cat::Science,
            1800,
            7,
        )
        .requires(&["scientific_method", "industrialization"])
        .with_effects(&[("construction_efficiency", 0.2), ("durability_bonus", 0.15)])
        .unlocks(&["high_tech_factory", "space_center"]),
        Technology::new(
            "information_technology",
            "Information Technology",
            "Computers and information systems",
            Cat::Science,
            2200,
            8,
        )
        .requires(&["advanced_materials"])
        .with_effects(&[("efficiency_bonus", 0.15), ("automation", 0.1)])
        .unlocks(&["tech_park", "data_center"]),
        // Security
        Technology::new(
            "law_enforcement",
            "Law Enforcement",
            "Professional public order services",
            Cat::Security,
            900,
            4,
        )
        .with_effects(&[("crime_reduction", 0.2), ("safety_bonus", 0.15)])
        .unlocks(&["police_station", "courthouse"]),
        Technology::new(
            "emergency_services",
            "Emergency Services",
            "Organized rescue services",
            Cat::Security,
            1100,
            5,
        )
        .requires(&["law_enforcement"])
        .with_effects(&[("disaster_resistance", 0.2), ("emergency_response", 0.25)])
        .unlocks(&["emergency_center", "disaster_shelter"]),
        Technology::new(
            "civil_defense",
            "Civil Defense",
            "A comprehensive city defense system",
            Cat::Security,
            1600,
            6,
        )
        .requires(&["emergency_services"])
        .with_effects(&[("city_defense", 0.3), ("crisis_management", 0.2)])
        .unlocks(&["command_center", "bunker"]),
        // Late game
        Technology::new(
            "smart_city",
            "Smart City",
            "Integrated city management systems",
            Cat::Science,
            3000,
            10,
        )
        .requires(&["information_technology", "urban_planning"])
        .with_effects(&[("city_efficiency", 0.25), ("automation", 0.2)])
        .unlocks(&["smart_grid", "automated_transport"]),
        Technology::new(
            "biotechnology",
            "Biotechnology",
            "Advanced biological technology",
            Cat::Science,
            2800,
            9,
        )
        .requires(&["advanced_materials", "healthcare_system"])
        .with_effects(&[("health_efficiency", 0.3), ("food_production", 0.2)])
        .unlocks(&["biotech_lab", "vertical_farm"]),
        Technology::new(
            "fusion_power",
            "Fusion Power",
            "Clean and practically unlimited energy",
            Cat::Environment,
            4000,
            12,
        )
        .requires(&["green_technology", "advanced_materials"])
        .with_effects(&[("energy_efficiency", 0.5), ("pollution_reduction", 0.4)])
        .unlocks(&["fusion_reactor"]),
        Technology::new(
            "space_technology",
            "Space Technology",
            "Exploration and use of space",
            Cat::Science,
            5000,
            15,
        )
        .requires(&["fusion_power", "smart_city"])
        .with_effects(&[("prestige_bonus", 0.3), ("research_speed", 0.3)])
        .unlocks(&["space_elevator", "orbital_station"]),
    ];

    link_dependents(&mut technologies);
    technologies
}

/// Fill `unlocks_technologies` from the reverse of the prerequisite edges.
pub(crate) fn link_dependents(technologies: &mut [Technology]) {
    let edges: Vec<(String, String)> = technologies
        .iter()
        .flat_map(|t| {
            t.prerequisites
                .iter()
                .map(move |p| (p.clone(), t.id.clone()))
        })
        .collect();
    for tech in technologies.iter_mut() {
        tech.unlocks_technologies = edges
            .iter()
            .filter(|(prereq, _)| *prereq == tech.id)
            .map(|(_, dependent)| dependent.clone())
            .collect();
    }
}
