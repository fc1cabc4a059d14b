//! End-to-end composition tests.

use sqlclause::prelude::*;

fn names_and_values(clause: &Clause) -> Vec<(String, ParamValue)> {
    clause
        .params()
        .into_iter()
        .map(|p| {
            let (name, value) = p.into_parts();
            (name, value)
        })
        .collect()
}

#[test]
fn where_clause_is_flattened_into_statement() {
    let mut w = where_and();
    w.add_equals("u.Name", "@userName", Some("aaa")).unwrap();

    let stmt = statement([&select(["u.Id", "u.Name"]), &from("Users u"), &w]);
    let sql = stmt.to_sql();

    assert!(sql.contains(&w.to_sql()));
    assert_eq!(
        sql,
        "select\n\tu.Id,\n\tu.Name\nfrom\n\tUsers u\nwhere\n\t(u.Name = @userName)\n"
    );
    assert_eq!(stmt.params().len(), 1);
    assert_eq!(stmt.params()[0].name(), "@userName");
}

#[test]
fn select_top_with_filters_keeps_parameter_order() {
    let mut q = SelectStatementBuilder::new("Users u");
    q.top_default(Some(50i64)).unwrap();
    q.select_mut().add("u.Id").add("u.Name");
    q.where_mut()
        .add_equals("u.Name", "@name", Some("bob"))
        .unwrap()
        .add_equals("u.Age", "@age", Some(30))
        .unwrap()
        .add_equals("u.Email", "@email", None::<&str>)
        .unwrap();
    q.order_by_mut().add("u.Name desc");

    let stmt = q.build();
    assert_eq!(
        stmt.to_sql(),
        "select top(@top)\n\tu.Id,\n\tu.Name\n\
         from\n\tUsers u\n\
         where\n\t(u.Name = @name)\n\tand (u.Age = @age)\n\
         order by\n\tu.Name desc\n"
    );
    assert_eq!(
        names_and_values(&stmt),
        vec![
            ("@top".to_string(), ParamValue::Int64(50)),
            ("@name".to_string(), ParamValue::Text("bob".to_string())),
            ("@age".to_string(), ParamValue::Int32(30)),
        ]
    );
}

#[test]
fn optional_filters_all_absent_leave_no_where() {
    let name: Option<&str> = None;
    let ids: Option<Vec<i64>> = None;

    let mut q = SelectStatementBuilder::new("Users");
    q.where_mut()
        .add_starts_with("Name", "@name", name)
        .unwrap()
        .add_in("Id", "@id", ids)
        .unwrap()
        .add_between::<i32>("Age", "@minAge", None, "@maxAge", None)
        .unwrap();

    let stmt = q.build();
    assert_eq!(stmt.to_sql(), "select\n\t*\nfrom\n\tUsers\n");
    assert!(stmt.params().is_empty());
}

#[test]
fn cte_feeds_main_select() {
    let mut recent = cte("recent");
    recent
        .add("select CustomerId from Orders")
        .add_clause(&{
            let mut w = where_and();
            w.add_greater("CreatedAt", "@since", Some(7i32)).unwrap();
            w
        });

    let mut q = SelectStatementBuilder::new("recent r");
    let main = q.build();
    let stmt = statement([&recent, &main]);

    assert_eq!(
        stmt.to_sql(),
        ";with recent as (\n\
         \tselect CustomerId from Orders\n\
         \twhere\n\t(CreatedAt > @since)\n\n\
         )\n\
         select\n\t*\nfrom\n\trecent r\n"
    );
    assert!(stmt.contains_parameter("@since"));
}

#[test]
fn update_and_delete_statements() {
    let mut set = update("Users");
    set.add_keyed_with_param("Name", "Name = @name", "ann".to_param("@name"), false)
        .unwrap();
    let mut w = where_and();
    w.add_equals("Id", "@id", Some(1i64)).unwrap();

    let stmt = statement([&set, &w]);
    assert_eq!(
        stmt.to_sql(),
        "update Users\nset\n\tName = @name\nwhere\n\t(Id = @id)\n"
    );
    assert_eq!(stmt.params().len(), 2);

    let mut del = delete("Users");
    del.add_clause(&w);
    assert_eq!(del.to_sql(), "delete from Users\nwhere\n\t(Id = @id)\n\n");
    assert!(del.contains_parameter("@id"));
}

#[test]
fn insert_statement_with_values() {
    let mut row = values();
    row.add_keyed_with_param("@id", "@id", 1i64.to_param("@id"), false)
        .unwrap()
        .add_keyed_with_param("@name", "@name", "ann".to_param("@name"), false)
        .unwrap();

    let stmt = statement([&insert("Users", ["Id", "Name"]), &row]);
    assert_eq!(
        stmt.to_sql(),
        "insert into Users\n(\n\tId,\n\tName\n)\nvalues\n(\n\t@id,\n\t@name\n)\n"
    );
    assert_eq!(stmt.param_count(), 2);
}

#[test]
fn params_serialize_for_fixtures() {
    let mut w = where_and();
    w.add_in_list("Id", "@id", [3i32, 4]).unwrap();

    let json = serde_json::to_value(w.params()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "@id1", "value": 3, "type": "int32" },
            { "name": "@id2", "value": 4, "type": "int32" },
        ])
    );
}
