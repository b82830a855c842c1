use lpm::query;
use lpm::table::LpmTable;

const TABLE: &str = "\
10.0.0.0/8      100
10.1.0.0/16     101
10.1.2.0/24     102
192.168.0.0/16  200
2001:db8::/32   600
2001:db8:1::/48 601
";

fn answers(table: &str, queries: &str) -> String {
    let table = LpmTable::load_str(table).unwrap();
    let mut out = Vec::new();
    query::run(&table, queries.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn mixed_family_lookup_session() {
    let queries = "\
10.1.2.3
10.1.3.4
10.2.0.1
11.0.0.1
192.168.1.1
2001:db8:1::1
2001:db8:2::1
2002::1
";
    let expected = "\
102
101
100
-
200
601
600
-
";
    assert_eq!(answers(TABLE, queries), expected);
}

#[test]
fn answers_follow_query_order() {
    let queries = "11.0.0.1\n10.1.2.3\n11.0.0.1\n10.1.2.3\n";
    assert_eq!(answers(TABLE, queries), "-\n102\n-\n102\n");
}

#[test]
fn reloaded_prefix_serves_the_new_tag() {
    // the /8 is entered twice; with the narrower prefixes absent, every
    // 10.x address falls through to the second tag
    let table = "\
10.0.0.0/8      100
10.0.0.0/8      111
";
    assert_eq!(answers(table, "10.1.2.3\n"), "111\n");
}

#[test]
fn exact_full_width_prefix_wins() {
    let table = "10.0.0.0/8 100\n10.1.2.3/32 320\n";
    assert_eq!(answers(table, "10.1.2.3\n10.1.2.4\n"), "320\n100\n");
}
