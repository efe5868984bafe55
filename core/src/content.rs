//! Static text for the informational pages.

pub const APP_TITLE: &str = "Energy Consumption Predictions";

pub const HOME_TITLE: &str = "Welcome to the Energy Project";

pub const HOME_PARAGRAPHS: [&str; 5] = [
    "The Energy Project is a data analyst initiative dedicated to the thorough exploration \
     and optimization of energy consumption. In the context of rapid technological \
     advancements and sustainable development challenges, our primary goal is to \
     intricately analyze national and departmental energy dynamics, focusing on risk \
     mitigation strategies for potential blackouts.",
    "Leveraging the comprehensive Open Data Energy Networks (ODRE) dataset since 2013, \
     we conduct in-depth departmental-level analyses, scrutinize production sectors, \
     and assess the geographical distribution of renewable energy sources.",
    "Explore our meticulous dataset overview, encompassing actual consumption, \
     production components, Energy Transfer Stations, and vital metrics such as TCO and TCH.",
    "For precise energy predictions, visit the Machine Learning page.",
    "Join us in shaping a sustainable and efficient future through data-driven insights \
     and informed decision-making.",
];

/// Shown above every prediction.
pub const PREDICTION_METHOD_NOTE: &str = "Prediction made using pre-calculated data:";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Author {
    pub name: &'static str,
    pub profile_url: &'static str,
}

pub const AUTHORS: [Author; 3] = [
    Author {
        name: "Maryam Moradi",
        profile_url: "https://www.linkedin.com/in/maryam-moradi-92b89771/",
    },
    Author {
        name: "Sara Cerreto",
        profile_url: "https://www.linkedin.com/in/sara-cerreto/",
    },
    Author {
        name: "Leena Warunkar",
        profile_url: "https://www.linkedin.com/in/leena-warunkar/",
    },
];

/// Text for the presentation page given the configured link, if any.
pub fn presentation_lines(url: Option<&str>) -> Vec<String> {
    match url {
        Some(url) => vec![
            "The project presentation is available for download:".to_string(),
            url.to_string(),
        ],
        None => vec![
            "No presentation link is configured.".to_string(),
            "Set ENERGY_DASH_PRESENTATION_URL or pass --presentation-url.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_lines() {
        let lines = presentation_lines(Some("https://example.org/deck.pdf"));
        assert_eq!(lines[1], "https://example.org/deck.pdf");
        assert!(presentation_lines(None)[0].contains("No presentation link"));
    }
}
