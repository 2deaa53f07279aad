//! Static configuration for each annotation workflow.
//!
//! Every workflow is the same pipeline with different required fields,
//! prompt template, response schema, and field mappings. Templates ask for
//! bare JSON with a fixed top-level array key and one object per numbered
//! entry, in the same order as the list.

use notefill_core::FieldKind;

use crate::annotate::{AnnotationWorkflow, FieldMapping};
use crate::prompt::PromptTemplate;
use crate::route::crawl_order;
use crate::schema::FieldSpec;

const RECIPES_TEMPLATE: &str = "\
For each numbered recipe below, supply its ingredient list and cooking \
instructions.

Recipes:
{records}

Respond with JSON only, no prose, shaped as
{\"recipes\": [{\"ingredients\": \"...\", \"cooking_instructions\": \"...\"}, ...]}
with exactly one object per recipe, in the same order as the list. Write \
ingredients as one comma-separated line with quantities.";

const TRAVEL_TEMPLATE: &str = "\
For each numbered travel destination below, supply a short description, \
its region of the world, and an interest rating from 1 to 10 for someone \
based in {home}.

Destinations:
{records}

Respond with JSON only, no prose, shaped as
{\"destinations\": [{\"description\": \"...\", \"region\": \"...\", \"rating\": 7}, ...]}
with exactly one object per destination, in the same order as the list.";

const WALKS_TEMPLATE: &str = "\
For each numbered walking route near {home} below, supply a short \
description, its length in kilometres, and its terrain types.

Walks:
{records}

Respond with JSON only, no prose, shaped as
{\"walks\": [{\"description\": \"...\", \"distance_km\": 8.5, \"terrain\": \"moorland, woodland\"}, ...]}
with exactly one object per walk, in the same order as the list. Write \
terrain as a comma-separated list.";

const PUB_CRAWL_TEMPLATE: &str = "\
The numbered pubs below are already in walking order for a crawl starting \
from {home}. For each pub, supply a one-line note on what it is known for \
and what to drink there.

Pubs:
{records}

Respond with JSON only, no prose, shaped as
{\"pubs\": [{\"notes\": \"...\"}, ...]}
with exactly one object per pub, in the same order as the list.";

/// Recipe database: fill missing ingredients and instructions.
pub fn recipes() -> AnnotationWorkflow {
    AnnotationWorkflow {
        name: "recipes",
        name_field: "Name".to_string(),
        required_fields: vec![
            "Ingredients".to_string(),
            "Cooking Instructions".to_string(),
        ],
        template: PromptTemplate::new(RECIPES_TEMPLATE),
        items_key: "recipes".to_string(),
        schema: vec![
            FieldSpec::string("ingredients"),
            FieldSpec::string("cooking_instructions"),
        ],
        mappings: vec![
            FieldMapping::new("Ingredients", "ingredients", FieldKind::Text),
            FieldMapping::new(
                "Cooking Instructions",
                "cooking_instructions",
                FieldKind::Text,
            ),
        ],
        arrange: None,
    }
}

/// Travel wishlist: fill description, region, and rating.
pub fn travel() -> AnnotationWorkflow {
    AnnotationWorkflow {
        name: "travel",
        name_field: "Name".to_string(),
        required_fields: vec![
            "Description".to_string(),
            "Region".to_string(),
            "Rating".to_string(),
        ],
        template: PromptTemplate::new(TRAVEL_TEMPLATE),
        items_key: "destinations".to_string(),
        schema: vec![
            FieldSpec::string("description"),
            FieldSpec::string("region"),
            FieldSpec::number("rating"),
        ],
        mappings: vec![
            FieldMapping::new("Description", "description", FieldKind::Text),
            FieldMapping::new("Region", "region", FieldKind::SingleChoice),
            FieldMapping::new("Rating", "rating", FieldKind::Number),
        ],
        arrange: None,
    }
}

/// Walking routes: fill description, distance, and terrain tags.
pub fn walks() -> AnnotationWorkflow {
    AnnotationWorkflow {
        name: "walks",
        name_field: "Name".to_string(),
        required_fields: vec![
            "Description".to_string(),
            "Distance (km)".to_string(),
            "Terrain".to_string(),
        ],
        template: PromptTemplate::new(WALKS_TEMPLATE),
        items_key: "walks".to_string(),
        schema: vec![
            FieldSpec::string("description"),
            FieldSpec::number("distance_km"),
            FieldSpec::string("terrain"),
        ],
        mappings: vec![
            FieldMapping::new("Description", "description", FieldKind::Text),
            FieldMapping::new("Distance (km)", "distance_km", FieldKind::Number),
            FieldMapping::new("Terrain", "terrain", FieldKind::MultiChoice),
        ],
        arrange: None,
    }
}

/// Pub crawl: order pubs by walking distance from home, then fill notes.
pub fn pub_crawl(home: (f64, f64)) -> AnnotationWorkflow {
    AnnotationWorkflow {
        name: "pub_crawl",
        name_field: "Name".to_string(),
        required_fields: vec!["Notes".to_string()],
        template: PromptTemplate::new(PUB_CRAWL_TEMPLATE),
        items_key: "pubs".to_string(),
        schema: vec![FieldSpec::string("notes")],
        mappings: vec![FieldMapping::new("Notes", "notes", FieldKind::Text)],
        arrange: Some(Box::new(move |records| crawl_order(home, records))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mapping_key_is_in_schema() {
        for workflow in [recipes(), travel(), walks(), pub_crawl((0.0, 0.0))] {
            for mapping in &workflow.mappings {
                assert!(
                    workflow.schema.iter().any(|s| s.key == mapping.result_key),
                    "workflow {} maps unknown result key {}",
                    workflow.name,
                    mapping.result_key
                );
            }
        }
    }

    #[test]
    fn test_templates_carry_records_placeholder() {
        for workflow in [recipes(), travel(), walks(), pub_crawl((0.0, 0.0))] {
            let rendered = workflow.template.render(&["X".to_string()], &[("home", "Y".to_string())]);
            assert!(rendered.contains("1. X"), "workflow {}", workflow.name);
            assert!(!rendered.contains("{records}"));
        }
    }

    #[test]
    fn test_templates_name_their_items_key() {
        for workflow in [recipes(), travel(), walks(), pub_crawl((0.0, 0.0))] {
            let rendered = workflow.template.render(&[], &[]);
            assert!(
                rendered.contains(&format!("\"{}\"", workflow.items_key)),
                "workflow {}",
                workflow.name
            );
        }
    }
}
