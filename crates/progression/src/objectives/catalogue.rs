use super::goals::{BuildingQuota, CityMetric, ObjectiveGoal, Threshold};
use super::types::{Objective, ObjectiveCategory as Cat};

const SERVICE_BUILDINGS: &[&str] = &["school", "hospital", "police", "fire_station", "park"];

fn sustained(metric: CityMetric, threshold: Threshold) -> ObjectiveGoal {
    ObjectiveGoal::Sustained { metric, threshold }
}

/// The stock objective graph for a new game.
pub fn standard_catalogue() -> Vec<Objective> {
    vec![
        // Starting objectives
        Objective::new(
            "first_population",
            "First Residents",
            "Reach a population of 250",
            Cat::Population,
            ObjectiveGoal::Reach(CityMetric::Population),
            250.0,
        )
        .rewards(1_000.0, 5.0, "Bonus for your first 250 residents"),
        Objective::new(
            "basic_economy",
            "Stable Economy",
            "Hold $75,000 in the city budget",
            Cat::Economy,
            ObjectiveGoal::Reach(CityMetric::Money),
            75_000.0,
        )
        .rewards(2_000.0, 3.0, "Bonus for a stable economy"),
        Objective::new(
            "first_services",
            "Basic Services",
            "Build 17 schools, hospitals or houses",
            Cat::Buildings,
            ObjectiveGoal::Buildings {
                building_types: vec![
                    "school".to_string(),
                    "hospital".to_string(),
                    "house".to_string(),
                ],
            },
            17.0,
        )
        .rewards(1_500.0, 10.0, "Bonus for basic services"),
        Objective::new(
            "first_roads",
            "First Infrastructure",
            "Build 20 road segments",
            Cat::Infrastructure,
            ObjectiveGoal::Reach(CityMetric::RoadSegments),
            20.0,
        )
        .rewards(1_000.0, 5.0, "Bonus for your first infrastructure"),
        Objective::new(
            "crisis_survival",
            "Crisis Survival",
            "Survive 5 turns with less than $1,000 in the budget",
            Cat::Survival,
            sustained(CityMetric::Money, Threshold::Below(1_000.0)),
            5.0,
        )
        .rewards(5_000.0, 25.0, "Bonus for surviving a crisis"),
        // Second tier
        Objective::new(
            "growing_city",
            "Growing City",
            "Reach a population of 1,000",
            Cat::Population,
            ObjectiveGoal::Reach(CityMetric::Population),
            1_000.0,
        )
        .requires(&["first_population"])
        .rewards(3_000.0, 8.0, "Bonus for a growing city"),
        Objective::new(
            "happy_citizens",
            "Happy Citizens",
            "Keep satisfaction at 75% or more for 15 turns",
            Cat::Satisfaction,
            sustained(CityMetric::Satisfaction, Threshold::AtLeast(75.0)),
            15.0,
        )
        .requires(&["first_services"])
        .within(15)
        .rewards(2_500.0, 15.0, "Bonus for happy citizens"),
        Objective::new(
            "economic_powerhouse",
            "Economic Powerhouse",
            "Hold $150,000 in the city budget",
            Cat::Economy,
            ObjectiveGoal::Reach(CityMetric::Money),
            150_000.0,
        )
        .requires(&["basic_economy"])
        .rewards(5_000.0, 5.0, "Bonus for an economic powerhouse"),
        Objective::new(
            "metropolis",
            "Metropolis",
            "Reach a population of 2,000",
            Cat::Population,
            ObjectiveGoal::Reach(CityMetric::Population),
            2_000.0,
        )
        .requires(&["growing_city", "happy_citizens"])
        .rewards(10_000.0, 20.0, "Bonus for becoming a metropolis"),
        Objective::new(
            "tech_advancement",
            "Technological Progress",
            "Unlock 3 technologies",
            Cat::Technology,
            ObjectiveGoal::Reach(CityMetric::TechnologiesUnlocked),
            3.0,
        )
        .requires(&["economic_powerhouse"])
        .rewards(7_500.0, 12.0, "Bonus for technological progress"),
        Objective::new(
            "road_network",
            "Road Network",
            "Build 50 road segments",
            Cat::Infrastructure,
            ObjectiveGoal::Reach(CityMetric::RoadSegments),
            50.0,
        )
        .requires(&["growing_city"])
        .rewards(3_000.0, 8.0, "Bonus for a developed road network"),
        Objective::new(
            "diverse_economy",
            "Diverse Economy",
            "Build 5 residential, 5 industrial and 5 commercial buildings",
            Cat::Buildings,
            ObjectiveGoal::BuildingQuotas(vec![
                BuildingQuota::new(&["house", "apartment"], 5),
                BuildingQuota::new(&["factory", "warehouse"], 5),
                BuildingQuota::new(&["shop", "office"], 5),
            ]),
            15.0,
        )
        .requires(&["economic_powerhouse"])
        .rewards(4_000.0, 12.0, "Bonus for a diverse economy"),
        // Third tier
        Objective::new(
            "mega_city",
            "Mega City",
            "Reach a population of 5,000",
            Cat::Population,
            ObjectiveGoal::Reach(CityMetric::Population),
            5_000.0,
        )
        .requires(&["metropolis"])
        .rewards(15_000.0, 30.0, "Bonus for a mega city"),
        Objective::new(
            "efficient_city",
            "Efficient City",
            "Keep satisfaction at 80% or more for 20 turns",
            Cat::Satisfaction,
            sustained(CityMetric::Satisfaction, Threshold::AtLeast(80.0)),
            20.0,
        )
        .requires(&["happy_citizens", "tech_advancement"])
        .within(20)
        .rewards(8_000.0, 20.0, "Bonus for efficient management"),
        Objective::new(
            "economic_giant",
            "Economic Giant",
            "Hold $300,000 in the city budget",
            Cat::Economy,
            ObjectiveGoal::Reach(CityMetric::Money),
            300_000.0,
        )
        .requires(&["economic_powerhouse", "diverse_economy"])
        .rewards(25_000.0, 15.0, "Bonus for an economic giant"),
        Objective::new(
            "tech_master",
            "Technology Master",
            "Unlock 5 technologies",
            Cat::Technology,
            ObjectiveGoal::Reach(CityMetric::TechnologiesUnlocked),
            5.0,
        )
        .requires(&["tech_advancement"])
        .rewards(12_000.0, 25.0, "Bonus for technological mastery"),
        Objective::new(
            "population_boom",
            "Population Boom",
            "Grow the population by 1,000 within 15 turns",
            Cat::Growth,
            ObjectiveGoal::PopulationGrowth,
            1_000.0,
        )
        .requires(&["mega_city"])
        .within(15)
        .rewards(10_000.0, 18.0, "Bonus for a population boom"),
        Objective::new(
            "construction_spree",
            "Construction Spree",
            "Build 100 buildings",
            Cat::Buildings,
            ObjectiveGoal::Reach(CityMetric::TotalBuildings),
            100.0,
        )
        .requires(&["diverse_economy"])
        .rewards(8_000.0, 10.0, "Bonus for rapid expansion"),
        // Late game
        Objective::new(
            "economic_rollercoaster",
            "Economic Rollercoaster",
            "Swing the budget from below $5,000 to above $50,000 three times",
            Cat::Challenge,
            ObjectiveGoal::CyclicalThreshold {
                metric: CityMetric::Money,
                low_below: 5_000.0,
                high_above: 50_000.0,
            },
            3.0,
        )
        .requires(&["economic_giant"])
        .rewards(15_000.0, 30.0, "Bonus for riding out economic swings"),
        Objective::new(
            "satisfaction_master",
            "Satisfaction Master",
            "Keep satisfaction at 90% or more for 30 turns",
            Cat::Satisfaction,
            sustained(CityMetric::Satisfaction, Threshold::AtLeast(90.0)),
            30.0,
        )
        .requires(&["efficient_city"])
        .within(30)
        .rewards(20_000.0, 40.0, "Bonus for masterful satisfaction management"),
        Objective::new(
            "ultimate_city",
            "Ultimate City",
            "Reach a population of 10,000",
            Cat::Population,
            ObjectiveGoal::Reach(CityMetric::Population),
            10_000.0,
        )
        .requires(&["population_boom", "satisfaction_master", "tech_master"])
        .rewards(50_000.0, 50.0, "Bonus for the ultimate city"),
        Objective::new(
            "millionaire_mayor",
            "Millionaire Mayor",
            "Hold $1,000,000 in the city budget",
            Cat::Economy,
            ObjectiveGoal::Reach(CityMetric::Money),
            1_000_000.0,
        )
        .requires(&["economic_giant", "construction_spree"])
        .rewards(100_000.0, 25.0, "Bonus for becoming a millionaire"),
        Objective::new(
            "infrastructure_king",
            "Infrastructure King",
            "Build 200 road segments and 50 service buildings",
            Cat::Infrastructure,
            ObjectiveGoal::RoadsAndBuildings {
                building_types: SERVICE_BUILDINGS.iter().map(|t| t.to_string()).collect(),
            },
            250.0,
        )
        .requires(&["road_network", "construction_spree"])
        .rewards(30_000.0, 35.0, "Bonus for the king of infrastructure"),
        Objective::new(
            "disaster_survivor",
            "Disaster Survivor",
            "Survive 10 turns with satisfaction below 30%",
            Cat::Survival,
            sustained(CityMetric::Satisfaction, Threshold::Below(30.0)),
            10.0,
        )
        .requires(&["crisis_survival"])
        .rewards(12_000.0, 40.0, "Bonus for surviving a disaster"),
        Objective::new(
            "phoenix_city",
            "Phoenix City",
            "Rebuild the city: fall below 500 residents, then reach 3,000",
            Cat::Challenge,
            ObjectiveGoal::PhaseTransition {
                metric: CityMetric::Population,
                low_below: 500.0,
                high_at_least: 3_000.0,
            },
            1.0,
        )
        .requires(&["disaster_survivor"])
        .rewards(25_000.0, 50.0, "Bonus for rising from the ashes"),
    ]
}
