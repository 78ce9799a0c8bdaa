mod common;

use common::{BUILDINGS_XML, TestResult, city_style};
use mapstyle::{Filter, MapnikError, MapnikTranslator, OptionValue, OutputOptions, Style};
use mapstyle_markup::{AttrValue, read_document};
use mapstyle_mapnik::SymbolizerElement;
use mapstyle_types::{
    ComparisonOperator, FillSymbolizer, FilterValue, LineSymbolizer, MarkSymbolizer,
    RasterSymbolizer, Rule, ScaleDenominator, Symbolizer, TextSymbolizer,
};

fn translator() -> MapnikTranslator {
    MapnikTranslator::new(OutputOptions {
        glyph_base_path: Some("glyphs".into()),
        ..Default::default()
    })
}

#[test]
fn full_style_survives_write_and_read() -> TestResult {
    let translator = translator();
    let xml = translator.write_style(&city_style())?;

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
    assert_eq!(translator.read_style(&xml)?, city_style());
    Ok(())
}

#[test]
fn elements_keep_rule_and_symbolizer_order() -> TestResult {
    let root = read_document(&translator().write_style(&city_style())?)?;
    let style = &root.children[0];

    let rule_names: Vec<String> = style
        .children
        .iter()
        .filter_map(|rule| rule.attribute("name").map(ToString::to_string))
        .collect();
    assert_eq!(rule_names, vec!["parks", "primary roads", "points", "hillshade"]);

    let roads: Vec<&str> = style.children[1]
        .children
        .iter()
        .map(|child| child.name.as_str())
        .collect();
    assert_eq!(
        roads,
        vec![
            "MaxScaleDenominator",
            "MinScaleDenominator",
            "Filter",
            "LineSymbolizer",
            "LineSymbolizer"
        ]
    );

    let points: Vec<&str> = style.children[2]
        .children
        .iter()
        .map(|child| child.name.as_str())
        .collect();
    assert_eq!(
        points,
        vec!["Filter", "MarkersSymbolizer", "MarkersSymbolizer", "TextSymbolizer"]
    );
    Ok(())
}

#[test]
fn written_attributes_match_mapnik_vocabulary() -> TestResult {
    let xml = translator().write_style(&city_style())?;

    assert!(xml.contains(r##"<PolygonSymbolizer fill="#c8facc" fill-opacity="0.8"/>"##));
    assert!(xml.contains(r##"<LineSymbolizer stroke="#88c98c" stroke-width="0.75"/>"##));
    assert!(xml.contains(r#"stroke-dasharray="6,3""#));
    assert!(xml.contains(r#"file="glyphs/star.svg""#));
    assert!(xml.contains(r#"width="6" height="6""#));
    assert!(xml.contains(r#"transform="rotate(30deg)""#));
    assert!(xml.contains(r#"vertical-alignment="top""#));
    assert!(xml.contains("[name]</TextSymbolizer>"));
    assert!(xml.contains("<Filter>not ([access] == 'private')</Filter>"));
    Ok(())
}

#[test]
fn native_mapnik_stylesheet_is_read() -> TestResult {
    let style = MapnikTranslator::default().read_style(BUILDINGS_XML)?;

    let expected = Style {
        name: "buildings".into(),
        rules: vec![
            Rule {
                name: None,
                filter: Some(Filter::and(vec![
                    Filter::equal("building", "yes"),
                    Filter::negate(Filter::equal("amenity", FilterValue::Null)),
                ])),
                scale_denominator: Some(ScaleDenominator {
                    min: None,
                    max: Some(25000.0),
                }),
                symbolizers: vec![
                    Symbolizer::Fill(FillSymbolizer {
                        color: Some("#d9d0c9".into()),
                        antialias: Some(true),
                        ..Default::default()
                    }),
                    Symbolizer::Line(LineSymbolizer {
                        color: Some("#b9a99b".into()),
                        width: Some(0.5),
                        ..Default::default()
                    }),
                ],
            },
            Rule {
                symbolizers: vec![Symbolizer::Text(TextSymbolizer {
                    label: Some("name".into()),
                    font: Some(vec!["DejaVu Sans Book".into()]),
                    size: Some(9.0),
                    color: Some("#555".into()),
                    halo_width: Some(1.0),
                    ..Default::default()
                })],
                ..Default::default()
            },
        ],
    };
    assert_eq!(style, expected);
    Ok(())
}

#[test]
fn fill_outline_is_written_as_a_line_and_read_back_as_one() -> TestResult {
    let style = Style {
        name: "outlined".into(),
        rules: vec![Rule {
            symbolizers: vec![Symbolizer::Fill(FillSymbolizer {
                color: Some("#eeeeee".into()),
                outline_color: Some("#000000".into()),
                outline_width: Some(1.0),
                ..Default::default()
            })],
            ..Default::default()
        }],
    };
    let translator = translator();
    let read = translator.read_style(&translator.write_style(&style)?)?;

    assert_eq!(
        read.rules[0].symbolizers,
        vec![
            Symbolizer::Fill(FillSymbolizer {
                color: Some("#eeeeee".into()),
                ..Default::default()
            }),
            Symbolizer::Line(LineSymbolizer {
                color: Some("#000000".into()),
                width: Some(1.0),
                ..Default::default()
            }),
        ]
    );
    Ok(())
}

#[test]
fn runaway_filter_nesting_is_an_error_not_a_crash() {
    let depth = 10_000;
    let xml = format!(
        "<Style name=\"deep\"><Rule><Filter>{}[a] = 1{}</Filter></Rule></Style>",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let err = MapnikTranslator::default().read_style(&xml).unwrap_err();

    assert!(matches!(err, MapnikError::Rule { index: 0, .. }));
    assert!(matches!(
        err.innermost(),
        MapnikError::Filter(mapstyle::FilterError::MalformedExpression { .. })
    ));
}

#[test]
fn output_options_are_merged_without_overriding() -> TestResult {
    let mut options = OutputOptions::default();
    options
        .map_options
        .insert("srs".into(), OptionValue::from("+init=epsg:3857"));
    options
        .style_options
        .insert("name".into(), OptionValue::from("configured"));
    options.symbolizer_options.insert(
        SymbolizerElement::Raster,
        [("scaling".to_string(), OptionValue::from("bilinear"))].into_iter().collect(),
    );
    let root = MapnikTranslator::new(options).style_to_node(&city_style())?;

    assert_eq!(root.attribute("srs"), Some(&AttrValue::from("+init=epsg:3857")));
    let style = &root.children[0];
    assert_eq!(style.attribute("name"), Some(&AttrValue::from("city")));
    let raster = &style.children[3].children[0];
    assert_eq!(raster.attribute("scaling"), Some(&AttrValue::from("bilinear")));
    assert_eq!(raster.attribute("opacity"), Some(&AttrValue::from(0.4)));
    Ok(())
}

#[test]
fn hidden_symbolizers_write_zero_opacity() -> TestResult {
    let style = Style {
        name: String::new(),
        rules: vec![Rule {
            symbolizers: vec![Symbolizer::Raster(RasterSymbolizer {
                opacity: Some(0.9),
                visibility: Some(false),
            })],
            ..Default::default()
        }],
    };
    let xml = MapnikTranslator::default().write_style(&style)?;
    assert!(xml.contains(r#"<RasterSymbolizer opacity="0"/>"#));
    assert!(xml.contains("<Style>"));
    Ok(())
}

#[test]
fn unsupported_mark_fails_with_rule_context() {
    let mut style = city_style();
    style.rules[2].symbolizers[0] = Symbolizer::Mark(MarkSymbolizer {
        well_known_name: Some("Circle".into()),
        ..Default::default()
    });
    let err = translator().write_style(&style).unwrap_err();

    assert_eq!(
        err.to_string(),
        "rule 2 'points': symbolizer 0 (Mark): well-known mark 'Circle' has no Mapnik glyph"
    );
}

#[test]
fn unknown_symbolizer_element_fails_the_read() {
    let xml = r#"<Style><Rule><BuildingSymbolizer height="12"/></Rule></Style>"#;
    let err = MapnikTranslator::default().read_style(xml).unwrap_err();
    assert!(matches!(
        err.innermost(),
        MapnikError::UnrecognizedElement(name) if name == "BuildingSymbolizer"
    ));
}

#[test]
fn match_operator_cannot_be_read_back() -> TestResult {
    let style = Style {
        name: "search".into(),
        rules: vec![Rule {
            filter: Some(Filter::comparison(ComparisonOperator::Match, "name", "^Main")),
            ..Default::default()
        }],
    };
    let translator = MapnikTranslator::default();
    let xml = translator.write_style(&style)?;
    let err = translator.read_style(&xml).unwrap_err();

    assert!(matches!(
        err.innermost(),
        MapnikError::Filter(mapstyle::FilterError::UnsupportedOperator { .. })
    ));
    Ok(())
}

#[test]
fn translator_is_shared_across_threads() -> TestResult {
    let translator = translator();
    let expected = translator.write_style(&city_style())?;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| translator.write_style(&city_style())))
            .collect();
        for handle in handles {
            let written = handle.join().expect("translation thread panicked");
            assert_eq!(written.ok().as_deref(), Some(expected.as_str()));
        }
    });
    Ok(())
}
