#![allow(dead_code)]

use mapstyle::{Filter, Rule, ScaleDenominator, Style, Symbolizer};
use mapstyle_types::{
    Anchor, ComparisonOperator, FillSymbolizer, IconSymbolizer, LineCap, LineJoin,
    LineSymbolizer, MarkSymbolizer, RasterSymbolizer, TextSymbolizer,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A style touching every symbolizer kind, using only fields that survive a
/// write/read cycle unchanged.
pub fn city_style() -> Style {
    Style {
        name: "city".into(),
        rules: vec![
            Rule {
                name: Some("parks".into()),
                filter: Some(Filter::equal("leisure", "park")),
                scale_denominator: Some(ScaleDenominator {
                    min: None,
                    max: Some(100_000.0),
                }),
                symbolizers: vec![
                    Symbolizer::Fill(FillSymbolizer {
                        color: Some("#c8facc".into()),
                        opacity: Some(0.8),
                        ..Default::default()
                    }),
                    Symbolizer::Line(LineSymbolizer {
                        color: Some("#88c98c".into()),
                        width: Some(0.75),
                        ..Default::default()
                    }),
                ],
            },
            Rule {
                name: Some("primary roads".into()),
                filter: Some(Filter::and(vec![
                    Filter::equal("highway", "primary"),
                    Filter::or(vec![
                        Filter::comparison(ComparisonOperator::GreaterThanOrEqual, "lanes", 2.0),
                        Filter::equal("oneway", "yes"),
                    ]),
                ])),
                scale_denominator: Some(ScaleDenominator {
                    min: Some(500.0),
                    max: Some(500_000.0),
                }),
                symbolizers: vec![
                    Symbolizer::Line(LineSymbolizer {
                        color: Some("#a06b00".into()),
                        width: Some(7.0),
                        cap: Some(LineCap::Round),
                        join: Some(LineJoin::Round),
                        ..Default::default()
                    }),
                    Symbolizer::Line(LineSymbolizer {
                        color: Some("#fcd6a4".into()),
                        width: Some(5.0),
                        cap: Some(LineCap::Round),
                        dasharray: Some(vec![6.0, 3.0]),
                        ..Default::default()
                    }),
                ],
            },
            Rule {
                name: Some("points".into()),
                filter: Some(Filter::negate(Filter::equal("access", "private"))),
                scale_denominator: None,
                symbolizers: vec![
                    Symbolizer::Mark(MarkSymbolizer {
                        well_known_name: Some("Star".into()),
                        color: Some("#ff0000".into()),
                        radius: Some(6.0),
                        rotate: Some(30.0),
                        ..Default::default()
                    }),
                    Symbolizer::Icon(IconSymbolizer {
                        image: Some("icons/fuel.svg".into()),
                        size: Some(12.0),
                        allow_overlap: Some(true),
                        ..Default::default()
                    }),
                    Symbolizer::Text(TextSymbolizer {
                        label: Some("name".into()),
                        font: Some(vec!["Open Sans Regular".into()]),
                        size: Some(10.0),
                        color: Some("#333333".into()),
                        halo_color: Some("#ffffff".into()),
                        halo_width: Some(1.0),
                        anchor: Some(Anchor::Top),
                        offset: Some([0.0, 4.0]),
                        ..Default::default()
                    }),
                ],
            },
            Rule {
                name: Some("hillshade".into()),
                symbolizers: vec![Symbolizer::Raster(RasterSymbolizer {
                    opacity: Some(0.4),
                    visibility: None,
                })],
                ..Default::default()
            },
        ],
    }
}

/// A hand-written stylesheet in Mapnik's own spelling.
pub const BUILDINGS_XML: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE Map[]>
<Map srs="+init=epsg:3857" background-color="#b5d0d0">
  <Style name="buildings" filter-mode="first">
    <Rule>
      <MaxScaleDenominator>25000</MaxScaleDenominator>
      <Filter>[building] = 'yes' and not ([amenity] = null)</Filter>
      <PolygonSymbolizer fill="#d9d0c9" gamma="1" clip="false"/>
      <LineSymbolizer stroke="#b9a99b" stroke-width="0.5"/>
    </Rule>
    <Rule>
      <TextSymbolizer face-name="DejaVu Sans Book" size="9" fill="#555" halo-radius="1" placement="point">[name]</TextSymbolizer>
    </Rule>
  </Style>
  <Layer name="buildings" srs="+init=epsg:3857">
    <StyleName>buildings</StyleName>
  </Layer>
</Map>
"##;
