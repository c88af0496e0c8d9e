use crate::Query;

#[test]
fn test_table_trims_slashes() {
    let query = Query::table("/users/");
    assert_eq!(query.resource(), "users");
}

#[test]
fn test_rpc_prefixes_resource() {
    let query = Query::rpc("get_input_file_type_stats");
    assert_eq!(query.resource(), "rpc/get_input_file_type_stats");
}

fn pairs(query: &Query) -> Vec<(&str, &str)> {
    query
        .params()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

#[test]
fn test_filters_render_postgrest_operators() {
    let query = Query::table("folders")
        .eq("user_id", 42)
        .select("id,name")
        .order_desc("updated_at")
        .limit(4);

    assert_eq!(
        pairs(&query),
        vec![
            ("user_id", "eq.42"),
            ("select", "id,name"),
            ("order", "updated_at.desc"),
            ("limit", "4"),
        ]
    );
    assert_eq!(
        query.to_string(),
        "folders?user_id=eq.42&select=id,name&order=updated_at.desc&limit=4"
    );
}

#[test]
fn test_params_keep_insertion_order() {
    let query = Query::table("user_preferences")
        .on_conflict("user_id")
        .param("columns", "user_id,format");

    assert_eq!(
        pairs(&query),
        vec![("on_conflict", "user_id"), ("columns", "user_id,format")]
    );
}

#[test]
fn test_no_params_renders_bare_resource() {
    assert!(Query::table("users").params().is_empty());
    assert_eq!(Query::table("users").to_string(), "users");
}
