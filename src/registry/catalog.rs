//! Built-in football market catalog.
//!
//! Betpawa IDs are market type IDs, Sportybet IDs are the numeric market IDs
//! its feed uses alongside a specifier, and Bet9ja keys are the market token
//! of `S_<MARKET>[@<PARAM>]_<OUTCOME>`.

use crate::domain::{HandicapStyle, MarketMapping, MarketMappingBuilder};

/// Every market mapping known to the engine, in catalog order.
#[must_use]
pub fn markets() -> Vec<MarketMapping> {
    let mut markets = Vec::with_capacity(40);
    markets.extend(full_time());
    markets.extend(first_half());
    markets.extend(second_half());
    markets.extend(combinations());
    markets.extend(variable_outcome());
    markets.extend(specials());
    markets
}

fn full_time() -> Vec<MarketMapping> {
    vec![
        home_draw_away(
            MarketMapping::builder("1x2_ft", "1X2 - Full Time")
                .betpawa("3743")
                .sportybet("1")
                .bet9ja("1X2"),
            ["1", "2", "3"],
        )
        .build(),
        double_chance(
            MarketMapping::builder("double_chance_ft", "Double Chance - Full Time")
                .betpawa("4693")
                .sportybet("10")
                .bet9ja("DC"),
        )
        .build(),
        home_away(
            MarketMapping::builder("draw_no_bet_ft", "Draw No Bet - Full Time")
                .betpawa("4703")
                .sportybet("11")
                .bet9ja("DNB"),
            ["4", "5"],
        )
        .build(),
        yes_no(
            MarketMapping::builder("btts_ft", "Both Teams To Score - Full Time")
                .betpawa("3795")
                .sportybet("29")
                .bet9ja("GGNG"),
            ["GG", "NG"],
        )
        .build(),
        over_under(
            MarketMapping::builder("over_under_ft", "Over/Under - Full Time")
                .betpawa("5000")
                .sportybet("18")
                .bet9ja("OU"),
        )
        .build(),
        over_under(
            MarketMapping::builder("home_over_under_ft", "Home Team Over/Under - Full Time")
                .betpawa("5006")
                .sportybet("19")
                .bet9ja("HOU"),
        )
        .build(),
        over_under(
            MarketMapping::builder("away_over_under_ft", "Away Team Over/Under - Full Time")
                .betpawa("5003")
                .sportybet("20")
                .bet9ja("AOU"),
        )
        .build(),
        home_draw_away(
            MarketMapping::builder("european_handicap_ft", "Handicap - Full Time")
                .betpawa("4724")
                .sportybet("14")
                .bet9ja("1X2HND")
                .handicap(HandicapStyle::European),
            ["1711", "1712", "1713"],
        )
        .build(),
        home_away(
            MarketMapping::builder("asian_handicap_ft", "Asian Handicap - Full Time")
                .betpawa("3774")
                .sportybet("16")
                .bet9ja("AH")
                .handicap(HandicapStyle::Asian),
            ["1714", "1715"],
        )
        .build(),
        MarketMapping::builder("odd_even_ft", "Odd/Even - Full Time")
            .betpawa("4880")
            .sportybet("26")
            .bet9ja("OE")
            .outcome("odd", Some("Odd"), Some("70"), Some("ODD"))
            .outcome("even", Some("Even"), Some("72"), Some("EVEN"))
            .build(),
        yes_no(
            MarketMapping::builder("home_clean_sheet_ft", "Home Team Clean Sheet")
                .betpawa("4830")
                .sportybet("31")
                .bet9ja("CSH"),
            ["Y", "N"],
        )
        .build(),
        yes_no(
            MarketMapping::builder("away_clean_sheet_ft", "Away Team Clean Sheet")
                .betpawa("4831")
                .sportybet("32")
                .bet9ja("CSA"),
            ["Y", "N"],
        )
        .build(),
    ]
}

fn first_half() -> Vec<MarketMapping> {
    vec![
        home_draw_away(
            MarketMapping::builder("1x2_1h", "1X2 - 1st Half")
                .betpawa("3783")
                .sportybet("60")
                .bet9ja("1X2HT"),
            ["1", "2", "3"],
        )
        .build(),
        double_chance(
            MarketMapping::builder("double_chance_1h", "Double Chance - 1st Half")
                .betpawa("4694")
                .sportybet("63")
                .bet9ja("DCHT"),
        )
        .build(),
        home_away(
            MarketMapping::builder("draw_no_bet_1h", "Draw No Bet - 1st Half")
                .betpawa("4704")
                .sportybet("64")
                .bet9ja("DNBHT"),
            ["4", "5"],
        )
        .build(),
        over_under(
            MarketMapping::builder("over_under_1h", "Over/Under - 1st Half")
                .betpawa("5004")
                .sportybet("68")
                .bet9ja("OUHT"),
        )
        .build(),
        yes_no(
            MarketMapping::builder("btts_1h", "Both Teams To Score - 1st Half")
                .betpawa("3796")
                .sportybet("75")
                .bet9ja("GGNGHT"),
            ["GG", "NG"],
        )
        .build(),
        home_draw_away(
            MarketMapping::builder("european_handicap_1h", "Handicap - 1st Half")
                .betpawa("4725")
                .sportybet("65")
                .bet9ja("1X2HNDHT")
                .handicap(HandicapStyle::European),
            ["1711", "1712", "1713"],
        )
        .build(),
        home_away(
            MarketMapping::builder("asian_handicap_1h", "Asian Handicap - 1st Half")
                .betpawa("3775")
                .sportybet("66")
                .bet9ja("AHHT")
                .handicap(HandicapStyle::Asian),
            ["1714", "1715"],
        )
        .build(),
    ]
}

fn second_half() -> Vec<MarketMapping> {
    vec![
        home_draw_away(
            MarketMapping::builder("1x2_2h", "1X2 - 2nd Half")
                .betpawa("3790")
                .sportybet("83")
                .bet9ja("1X2SH"),
            ["1", "2", "3"],
        )
        .build(),
        double_chance(
            MarketMapping::builder("double_chance_2h", "Double Chance - 2nd Half")
                .betpawa("4695")
                .sportybet("85")
                .bet9ja("DCSH"),
        )
        .build(),
        over_under(
            MarketMapping::builder("over_under_2h", "Over/Under - 2nd Half")
                .betpawa("5008")
                .sportybet("90")
                .bet9ja("OUSH"),
        )
        .build(),
    ]
}

fn combinations() -> Vec<MarketMapping> {
    vec![
        MarketMapping::builder("htft", "Half Time/Full Time")
            .betpawa("4706")
            .sportybet("47")
            .bet9ja("HTFT")
            .outcome("home_home", Some("1/1"), Some("418"), Some("1/1"))
            .outcome("home_draw", Some("1/X"), Some("419"), Some("1/X"))
            .outcome("home_away", Some("1/2"), Some("420"), Some("1/2"))
            .outcome("draw_home", Some("X/1"), Some("421"), Some("X/1"))
            .outcome("draw_draw", Some("X/X"), Some("422"), Some("X/X"))
            .outcome("draw_away", Some("X/2"), Some("423"), Some("X/2"))
            .outcome("away_home", Some("2/1"), Some("424"), Some("2/1"))
            .outcome("away_draw", Some("2/X"), Some("425"), Some("2/X"))
            .outcome("away_away", Some("2/2"), Some("426"), Some("2/2"))
            .build(),
        MarketMapping::builder("1x2_over_under_ft", "1X2 & Over/Under - Full Time")
            .betpawa("5014")
            .sportybet("37")
            .bet9ja("1X2OU")
            .line()
            .outcome("home_under", Some("1 & Under"), Some("794"), Some("1U"))
            .outcome("home_over", Some("1 & Over"), Some("796"), Some("1O"))
            .outcome("draw_under", Some("X & Under"), Some("798"), Some("XU"))
            .outcome("draw_over", Some("X & Over"), Some("800"), Some("XO"))
            .outcome("away_under", Some("2 & Under"), Some("802"), Some("2U"))
            .outcome("away_over", Some("2 & Over"), Some("804"), Some("2O"))
            .build(),
        MarketMapping::builder("highest_scoring_half", "Highest Scoring Half")
            .betpawa("4840")
            .sportybet("52")
            .bet9ja("HSH")
            .outcome("first_half", Some("1st Half"), Some("920"), Some("1"))
            .outcome("second_half", Some("2nd Half"), Some("922"), Some("2"))
            .outcome("equal", Some("Equal"), Some("924"), Some("X"))
            .build(),
    ]
}

/// Markets whose outcome set the platform defines. Sportybet sends these with
/// a `variant` specifier and its own outcome IDs, so it always resolves
/// them by position.
fn variable_outcome() -> Vec<MarketMapping> {
    vec![
        scores(
            MarketMapping::builder("correct_score_ft", "Correct Score - Full Time")
                .betpawa("3950")
                .sportybet("45")
                .bet9ja("CS"),
            &[
                "0:0", "1:0", "0:1", "1:1", "2:0", "0:2", "2:1", "1:2", "2:2", "3:0", "0:3",
                "3:1", "1:3", "3:2", "2:3", "3:3", "4:0", "0:4", "4:1", "1:4",
            ],
        )
        .build(),
        scores(
            MarketMapping::builder("correct_score_1h", "Correct Score - 1st Half")
                .betpawa("3951")
                .sportybet("81")
                .bet9ja("CSHT"),
            &["0:0", "1:0", "0:1", "1:1", "2:0", "0:2", "2:1", "1:2"],
        )
        .build(),
        tokens(
            MarketMapping::builder("exact_goals_ft", "Exact Goals - Full Time")
                .betpawa("4750")
                .sportybet("21")
                .bet9ja("EG"),
            "goals",
            &["0", "1", "2", "3", "4", "5", "6+"],
        )
        .build(),
        MarketMapping::builder("winning_margin_ft", "Winning Margin - Full Time")
            .betpawa("4790")
            .sportybet("15")
            .bet9ja("WM")
            .variant()
            .positional()
            .outcome("home_by_1", Some("1 by 1"), None, Some("H1"))
            .outcome("home_by_2", Some("1 by 2"), None, Some("H2"))
            .outcome("home_by_3_plus", Some("1 by 3+"), None, Some("H3+"))
            .outcome("draw", Some("X"), None, Some("D"))
            .outcome("away_by_1", Some("2 by 1"), None, Some("A1"))
            .outcome("away_by_2", Some("2 by 2"), None, Some("A2"))
            .outcome("away_by_3_plus", Some("2 by 3+"), None, Some("A3+"))
            .build(),
        tokens(
            MarketMapping::builder("multigoals_ft", "Multigoals - Full Time")
                .betpawa("4799")
                .sportybet("552")
                .bet9ja("MG"),
            "goals",
            &[
                "1-2", "1-3", "1-4", "1-5", "1-6", "2-3", "2-4", "2-5", "2-6", "3-4", "3-5",
                "3-6", "4-5", "4-6", "5-6", "7+",
            ],
        )
        .build(),
    ]
}

fn specials() -> Vec<MarketMapping> {
    vec![
        // Sportybet sends `goalnr` with this market; the goal number is not a
        // mapping key.
        MarketMapping::builder("next_goal", "Next Goal")
            .betpawa("4712")
            .sportybet("8")
            .bet9ja("NEXTG")
            .outcome("home", Some("1"), Some("6"), Some("1"))
            .outcome("none", Some("No Goal"), Some("7"), Some("N"))
            .outcome("away", Some("2"), Some("8"), Some("2"))
            .build(),
        over_under(
            MarketMapping::builder("corners_over_under_ft", "Total Corners Over/Under")
                .betpawa("5100")
                .sportybet("166")
                .bet9ja("OUCORNERS"),
        )
        .build(),
        over_under(
            MarketMapping::builder("bookings_over_under_ft", "Total Bookings Over/Under")
                .betpawa("5110")
                .sportybet("139")
                .bet9ja("OUBOOK"),
        )
        .build(),
        // Not offered by Betpawa.
        MarketMapping::builder("first_corner", "First Corner")
            .sportybet("162")
            .bet9ja("1STCORNER")
            .outcome("home", None, Some("1"), Some("1"))
            .outcome("none", None, Some("2"), Some("N"))
            .outcome("away", None, Some("3"), Some("2"))
            .build(),
        MarketMapping::builder("first_card", "First Card")
            .sportybet("173")
            .bet9ja("1STCARD")
            .outcome("home", None, Some("1"), Some("1"))
            .outcome("none", None, Some("2"), Some("N"))
            .outcome("away", None, Some("3"), Some("2"))
            .build(),
    ]
}

// --- Outcome shapes shared by many markets ---

fn home_draw_away(builder: MarketMappingBuilder, sportybet: [&str; 3]) -> MarketMappingBuilder {
    builder
        .outcome("home", Some("1"), Some(sportybet[0]), Some("1"))
        .outcome("draw", Some("X"), Some(sportybet[1]), Some("X"))
        .outcome("away", Some("2"), Some(sportybet[2]), Some("2"))
}

fn home_away(builder: MarketMappingBuilder, sportybet: [&str; 2]) -> MarketMappingBuilder {
    builder
        .outcome("home", Some("1"), Some(sportybet[0]), Some("1"))
        .outcome("away", Some("2"), Some(sportybet[1]), Some("2"))
}

fn double_chance(builder: MarketMappingBuilder) -> MarketMappingBuilder {
    builder
        .outcome("home_or_draw", Some("1X"), Some("9"), Some("1X"))
        .outcome("home_or_away", Some("12"), Some("10"), Some("12"))
        .outcome("draw_or_away", Some("X2"), Some("11"), Some("X2"))
}

fn yes_no(builder: MarketMappingBuilder, bet9ja: [&str; 2]) -> MarketMappingBuilder {
    builder
        .outcome("yes", Some("Yes"), Some("74"), Some(bet9ja[0]))
        .outcome("no", Some("No"), Some("76"), Some(bet9ja[1]))
}

fn over_under(builder: MarketMappingBuilder) -> MarketMappingBuilder {
    builder
        .line()
        .outcome("over", Some("Over"), Some("12"), Some("O"))
        .outcome("under", Some("Under"), Some("13"), Some("U"))
}

/// Scoreline outcomes plus a trailing "any other score".
fn scores(builder: MarketMappingBuilder, lines: &[&str]) -> MarketMappingBuilder {
    let builder = lines.iter().copied().fold(builder.variant().positional(), |b, score| {
        let canonical = format!("score_{}", score.replace(':', "_"));
        b.outcome(&canonical, Some(score), None, Some(score))
    });
    builder.outcome("other", Some("Other"), None, Some("OTH"))
}

/// Positional outcomes whose Betpawa name and Bet9ja suffix are the same token.
fn tokens(builder: MarketMappingBuilder, prefix: &str, values: &[&str]) -> MarketMappingBuilder {
    values
        .iter()
        .copied()
        .fold(builder.variant().positional(), |b, value| {
            let canonical = format!("{prefix}_{}", value.replace('+', "_plus").replace('-', "_"));
            b.outcome(&canonical, Some(value), None, Some(value))
        })
}
