use super::types::{ContextTag, EventCategory as Cat, RandomEvent};
use crate::effects::EffectDelta;

const fn fx(money: f64, satisfaction: f64, population: i64) -> EffectDelta {
    EffectDelta::new(money, satisfaction, population)
}

/// The 13 stock events.
pub fn standard_catalogue() -> Vec<RandomEvent> {
    vec![
        RandomEvent::new(
            "district_fire",
            "District Fire",
            "A fire broke out in a residential district. The fire brigade asks for orders.",
            fx(0.0, -15.0, -30),
        )
        .in_category(Cat::Disaster)
        .option("Send every fire unit", fx(-500.0, 5.0, -10))
        .option("Evacuate residents", fx(-200.0, -5.0, -5))
        .option("Ignore it", fx(0.0, -25.0, -50)),
        RandomEvent::new(
            "flu_epidemic",
            "Flu Epidemic",
            "A flu epidemic has hit the city. Hospitals are overflowing.",
            fx(0.0, -20.0, -80),
        )
        .in_category(Cat::Disaster)
        .option("Impose a quarantine", fx(-1_000.0, -10.0, -20))
        .option("Raise the hospital budget", fx(-1_500.0, 5.0, -40))
        .option("Ignore it", fx(0.0, -35.0, -120)),
        RandomEvent::new(
            "earthquake",
            "Earthquake",
            "A mild earthquake damaged part of the city's infrastructure.",
            fx(-2_000.0, -10.0, 0),
        )
        .in_category(Cat::Disaster)
        .option("Immediate repairs", fx(-3_000.0, 10.0, 0))
        .option("Gradual rebuilding", fx(-1_500.0, 0.0, 0))
        .option("Minimal repairs", fx(-500.0, -15.0, 0)),
        RandomEvent::new(
            "economic_crisis",
            "Economic Crisis",
            "A global economic crisis has reached the city. Unemployment is rising.",
            fx(-800.0, -15.0, 0),
        )
        .in_category(Cat::Crisis)
        .when(ContextTag::EconomicCrisis)
        .option("Social aid program", fx(-1_200.0, 15.0, 0))
        .option("Cut taxes", fx(-600.0, 10.0, 0))
        .option("Do nothing", fx(0.0, -20.0, 0)),
        RandomEvent::new(
            "workers_strike",
            "Workers' Strike",
            "City service workers went on strike demanding higher wages.",
            fx(0.0, -20.0, 0),
        )
        .in_category(Cat::Crisis)
        .option("Meet the demands", fx(-1_500.0, 20.0, 0))
        .option("Negotiate a compromise", fx(-700.0, 5.0, 0))
        .option("Reject the demands", fx(0.0, -30.0, 0)),
        RandomEvent::new(
            "government_grant",
            "Government Grant",
            "The government awarded the city an infrastructure grant.",
            fx(3_000.0, 10.0, 0),
        )
        .in_category(Cat::Positive)
        .when(ContextTag::Grant)
        .option("Invest in transport", fx(1_000.0, 15.0, 0))
        .option("Build parks", fx(1_500.0, 20.0, 0))
        .option("Save it for later", fx(3_000.0, 5.0, 0)),
        RandomEvent::new(
            "city_festival",
            "City Festival",
            "Organizers propose holding a large festival in the city.",
            fx(0.0, 5.0, 0),
        )
        .in_category(Cat::Positive)
        .when(ContextTag::Festival)
        .option("Fund the festival", fx(-1_500.0, 25.0, 10))
        .option("Partial support", fx(-500.0, 15.0, 0))
        .option("Decline", fx(0.0, -10.0, 0)),
        RandomEvent::new(
            "new_company",
            "New Company in Town",
            "A large company wants to open a branch in the city.",
            fx(0.0, 10.0, 25),
        )
        .in_category(Cat::Positive)
        .option("Offer tax breaks", fx(-500.0, 15.0, 40))
        .option("Standard terms", fx(500.0, 10.0, 25))
        .option("Reject the offer", fx(0.0, -5.0, 0)),
        RandomEvent::new(
            "residents_protest",
            "Residents' Protest",
            "Residents are protesting high taxes and poor services.",
            fx(0.0, -30.0, 0),
        )
        .in_category(Cat::Social)
        .when(ContextTag::Protest)
        .option("Cut taxes", fx(-1_000.0, 20.0, 0))
        .option("Improve services", fx(-2_000.0, 25.0, 0))
        .option("Ignore the protests", fx(0.0, -45.0, -30)),
        RandomEvent::new(
            "earth_day",
            "Earth Day",
            "Residents are celebrating Earth Day and ask for support for green initiatives.",
            fx(0.0, 5.0, 0),
        )
        .in_category(Cat::Other)
        .option("Fund the initiatives", fx(-1_000.0, 20.0, 0))
        .option("Token support", fx(-200.0, 10.0, 0))
        .option("Do not support", fx(0.0, -10.0, 0)),
        RandomEvent::new(
            "tech_innovation",
            "Technological Innovation",
            "Local scientists developed an innovative technology and seek funding.",
            fx(0.0, 5.0, 0),
        )
        .in_category(Cat::Other)
        .option("Fund the research", fx(-2_000.0, 15.0, 0))
        .option("Partial support", fx(-800.0, 8.0, 0))
        .option("Decline", fx(0.0, -5.0, 0)),
        RandomEvent::new(
            "harsh_winter",
            "Harsh Winter",
            "An unusually harsh winter raised heating and maintenance costs.",
            fx(-1_200.0, -15.0, 0),
        )
        .in_category(Cat::Other)
        .option("Increase social aid", fx(-2_000.0, 10.0, 0))
        .option("Standard measures", fx(-1_200.0, -15.0, 0))
        .option("Cut every cost", fx(-500.0, -30.0, 0)),
        RandomEvent::new(
            "heat_wave",
            "Heat Wave",
            "Record temperatures strain the energy and water supply.",
            fx(-800.0, -10.0, 0),
        )
        .in_category(Cat::Other)
        .option("Activate emergency systems", fx(-1_500.0, 5.0, 0))
        .option("Ration resources", fx(-400.0, -20.0, 0))
        .option("Do nothing", fx(0.0, -25.0, -20)),
    ]
}
