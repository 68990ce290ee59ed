//! Built-in airport catalog for the DACH region (Germany, Austria, Switzerland)

use crate::core_types::airport::{Airport, Runway};

/// Major airports in Germany (ED), Austria (LO) and Switzerland (LS)
pub fn dach_airports() -> Vec<Airport> {
    vec![
        Airport::new(
            "EDDF",
            "Frankfurt Main",
            "Frankfurt",
            "DE",
            364,
            "118.025",
            vec![
                Runway::new("07L", 70, 4000, true),
                Runway::new("25R", 250, 4000, true),
                Runway::new("07C", 70, 4000, true),
                Runway::new("25C", 250, 4000, true),
                Runway::new("07R", 70, 4000, true),
                Runway::new("25L", 250, 4000, true),
                Runway::new("18", 180, 4000, true),
            ],
        ),
        Airport::new(
            "EDDM",
            "München Franz Josef Strauß",
            "München",
            "DE",
            1487,
            "123.125",
            vec![
                Runway::new("08L", 80, 4000, true),
                Runway::new("26R", 260, 4000, true),
                Runway::new("08R", 80, 4000, true),
                Runway::new("26L", 260, 4000, true),
            ],
        ),
        Airport::new(
            "EDDL",
            "Düsseldorf",
            "Düsseldorf",
            "DE",
            147,
            "126.300",
            vec![
                Runway::new("05L", 50, 3000, true),
                Runway::new("23R", 230, 3000, true),
                Runway::new("05R", 50, 2700, true),
                Runway::new("23L", 230, 2700, true),
            ],
        ),
        Airport::new(
            "EDDB",
            "Berlin Brandenburg",
            "Berlin",
            "DE",
            157,
            "127.775",
            vec![
                Runway::new("07L", 70, 3600, true),
                Runway::new("25R", 250, 3600, true),
                Runway::new("07R", 70, 4000, true),
                Runway::new("25L", 250, 4000, true),
            ],
        ),
        Airport::new(
            "EDDH",
            "Hamburg Helmut Schmidt",
            "Hamburg",
            "DE",
            53,
            "127.125",
            vec![
                Runway::new("05", 50, 3250, true),
                Runway::new("23", 230, 3250, true),
                Runway::new("15", 150, 3666, true),
                Runway::new("33", 330, 3666, true),
            ],
        ),
        Airport::new(
            "EDDK",
            "Köln Bonn",
            "Köln",
            "DE",
            302,
            "125.625",
            vec![
                Runway::new("06", 60, 1863, false),
                Runway::new("24", 240, 1863, false),
                Runway::new("14L", 140, 3815, true),
                Runway::new("32R", 320, 3815, true),
                Runway::new("14R", 140, 2459, true),
                Runway::new("32L", 320, 2459, false),
            ],
        ),
        Airport::new(
            "EDDS",
            "Stuttgart",
            "Stuttgart",
            "DE",
            1276,
            "126.125",
            vec![
                Runway::new("07", 70, 3345, true),
                Runway::new("25", 250, 3345, true),
            ],
        ),
        Airport::new(
            "EDDP",
            "Leipzig Halle",
            "Leipzig",
            "DE",
            465,
            "126.100",
            vec![
                Runway::new("08L", 80, 3600, true),
                Runway::new("26R", 260, 3600, true),
                Runway::new("08R", 80, 3600, true),
                Runway::new("26L", 260, 3600, true),
            ],
        ),
        Airport::new(
            "EDDN",
            "Nürnberg",
            "Nürnberg",
            "DE",
            1046,
            "127.500",
            vec![
                Runway::new("10", 100, 2700, true),
                Runway::new("28", 280, 2700, true),
            ],
        ),
        Airport::new(
            "EDDC",
            "Dresden",
            "Dresden",
            "DE",
            755,
            "125.100",
            vec![
                Runway::new("04", 40, 2850, true),
                Runway::new("22", 220, 2850, true),
            ],
        ),
        Airport::new(
            "EDDW",
            "Bremen",
            "Bremen",
            "DE",
            14,
            "126.650",
            vec![
                Runway::new("09", 90, 2040, true),
                Runway::new("27", 270, 2040, true),
            ],
        ),
        Airport::new(
            "EDDV",
            "Hannover",
            "Hannover",
            "DE",
            183,
            "123.075",
            vec![
                Runway::new("09L", 90, 2340, true),
                Runway::new("27R", 270, 2340, true),
                Runway::new("09R", 90, 3800, true),
                Runway::new("27L", 270, 3800, true),
            ],
        ),
        Airport::new(
            "EDDT",
            "Berlin Tegel",
            "Berlin",
            "DE",
            122,
            "121.750",
            vec![
                Runway::new("08L", 80, 3023, true),
                Runway::new("26R", 260, 3023, true),
            ],
        ),
        Airport::new(
            "EDLW",
            "Dortmund",
            "Dortmund",
            "DE",
            425,
            "121.300",
            vec![
                Runway::new("06", 60, 2000, true),
                Runway::new("24", 240, 2000, true),
            ],
        ),
        Airport::new(
            "EDLP",
            "Paderborn Lippstadt",
            "Paderborn",
            "DE",
            699,
            "119.150",
            vec![
                Runway::new("06", 60, 2180, true),
                Runway::new("24", 240, 2180, true),
            ],
        ),
        Airport::new(
            "EDDR",
            "Saarbrücken",
            "Saarbrücken",
            "DE",
            1058,
            "119.100",
            vec![
                Runway::new("09", 90, 2000, true),
                Runway::new("27", 270, 2000, true),
            ],
        ),
        Airport::new(
            "EDFH",
            "Frankfurt Hahn",
            "Hahn",
            "DE",
            1649,
            "118.050",
            vec![
                Runway::new("03", 30, 3800, true),
                Runway::new("21", 210, 3800, true),
            ],
        ),
        Airport::new(
            "EDNY",
            "Friedrichshafen",
            "Friedrichshafen",
            "DE",
            1367,
            "119.350",
            vec![
                Runway::new("06", 60, 2356, true),
                Runway::new("24", 240, 2356, true),
            ],
        ),
        Airport::new(
            "EDJA",
            "Memmingen",
            "Memmingen",
            "DE",
            2077,
            "119.550",
            vec![
                Runway::new("06", 60, 3000, true),
                Runway::new("24", 240, 3000, true),
            ],
        ),
        Airport::new(
            "LOWW",
            "Wien Schwechat",
            "Wien",
            "AT",
            600,
            "128.125",
            vec![
                Runway::new("11", 110, 3500, true),
                Runway::new("29", 290, 3500, true),
                Runway::new("16", 160, 3600, true),
                Runway::new("34", 340, 3600, true),
            ],
        ),
        Airport::new(
            "LOWS",
            "Salzburg W.A. Mozart",
            "Salzburg",
            "AT",
            1411,
            "118.100",
            vec![
                Runway::new("15", 150, 2750, true),
                Runway::new("33", 330, 2750, true),
            ],
        ),
        Airport::new(
            "LOWG",
            "Graz",
            "Graz",
            "AT",
            1115,
            "126.700",
            vec![
                Runway::new("16C", 160, 3000, true),
                Runway::new("34C", 340, 3000, true),
            ],
        ),
        Airport::new(
            "LOWI",
            "Innsbruck Kranebitten",
            "Innsbruck",
            "AT",
            1907,
            "119.100",
            vec![
                Runway::new("08", 80, 2000, true),
                Runway::new("26", 260, 2000, true),
            ],
        ),
        Airport::new(
            "LOWK",
            "Klagenfurt",
            "Klagenfurt",
            "AT",
            1470,
            "118.250",
            vec![
                Runway::new("10L", 100, 2700, true),
                Runway::new("28R", 280, 2700, true),
            ],
        ),
        Airport::new(
            "LOWL",
            "Linz Hörsching",
            "Linz",
            "AT",
            978,
            "120.100",
            vec![
                Runway::new("08", 80, 3000, true),
                Runway::new("26", 260, 3000, true),
            ],
        ),
        Airport::new(
            "LSZH",
            "Zürich Kloten",
            "Zürich",
            "CH",
            1416,
            "128.525",
            vec![
                Runway::new("10", 100, 2500, true),
                Runway::new("28", 280, 2500, true),
                Runway::new("14", 140, 3700, true),
                Runway::new("32", 320, 3700, true),
                Runway::new("16", 160, 3300, true),
                Runway::new("34", 340, 3300, true),
            ],
        ),
        Airport::new(
            "LSGG",
            "Genève Cointrin",
            "Genève",
            "CH",
            1411,
            "128.025",
            vec![
                Runway::new("04", 40, 3900, true),
                Runway::new("22", 220, 3900, true),
            ],
        ),
        Airport::new(
            "LSZA",
            "Lugano Agno",
            "Lugano",
            "CH",
            915,
            "118.850",
            vec![
                Runway::new("01", 10, 1350, false),
                Runway::new("19", 190, 1350, false),
            ],
        ),
        Airport::new(
            "LSZB",
            "Bern Belp",
            "Bern",
            "CH",
            1674,
            "120.850",
            vec![
                Runway::new("14", 140, 1730, true),
                Runway::new("32", 320, 1730, true),
            ],
        ),
        Airport::new(
            "LSZR",
            "St. Gallen Altenrhein",
            "St. Gallen",
            "CH",
            1306,
            "119.375",
            vec![
                Runway::new("10", 100, 1500, false),
                Runway::new("28", 280, 1500, true),
            ],
        ),
        Airport::new(
            "LSME",
            "Emmen",
            "Emmen",
            "CH",
            1400,
            "124.250",
            vec![
                Runway::new("04", 40, 2500, true),
                Runway::new("22", 220, 2500, true),
            ],
        ),
        Airport::new(
            "LSMP",
            "Payerne",
            "Payerne",
            "CH",
            1465,
            "131.150",
            vec![
                Runway::new("05", 50, 2940, true),
                Runway::new("23", 230, 2940, true),
            ],
        ),
        Airport::new(
            "LSGS",
            "Sion",
            "Sion",
            "CH",
            1582,
            "118.275",
            vec![
                Runway::new("07", 70, 2000, true),
                Runway::new("25", 250, 2000, true),
            ],
        ),
        Airport::new(
            "EDDE",
            "Erfurt Weimar",
            "Erfurt",
            "DE",
            1036,
            "119.050",
            vec![
                Runway::new("10", 100, 2620, true),
                Runway::new("28", 280, 2620, true),
            ],
        ),
        Airport::new(
            "EDDG",
            "Münster Osnabrück",
            "Münster",
            "DE",
            160,
            "118.675",
            vec![
                Runway::new("07", 70, 2170, true),
                Runway::new("25", 250, 2170, true),
            ],
        ),
        Airport::new(
            "EDLV",
            "Niederrhein Weeze",
            "Weeze",
            "DE",
            106,
            "118.750",
            vec![
                Runway::new("09", 90, 2440, true),
                Runway::new("27", 270, 2440, true),
            ],
        ),
        Airport::new(
            "EDDZ",
            "Rostock Laage",
            "Rostock",
            "DE",
            138,
            "120.925",
            vec![
                Runway::new("10", 100, 2520, true),
                Runway::new("28", 280, 2520, true),
            ],
        ),
    ]
}
