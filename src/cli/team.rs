use serde_json::json;

use crate::cli::print_json;
use crate::output;
use crate::seed;

pub fn run(json_output: bool) -> i32 {
    let members = seed::team_members();
    if json_output {
        let members_json: Vec<_> = members.iter().map(output::json::member_json).collect();
        print_json(&output::json::success(json!({ "members": members_json })));
    } else {
        output::text::print_team(&members);
    }
    0
}
