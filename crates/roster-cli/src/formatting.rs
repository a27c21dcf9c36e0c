use roster_data::{AgeStats, Member, MemberTeam, Page, Team, TeamAgeStats};

macro_rules! next_attr {
    ($old:ident, $new:ident) => {
        if $old != $new {
            format!(" -> {}", $new)
        } else {
            "".to_string()
        }
    };
    ($old:ident, $new:ident, $attr:ident) => {
        if $old.$attr != $new.$attr {
            format!(" -> {}", $new.$attr)
        } else {
            "".to_string()
        }
    };
}

fn or_none<T: ToString>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

pub trait PrintFormatted {
    fn print_formatted(&self);
}

impl PrintFormatted for Member {
    fn print_formatted(&self) {
        println!("Username:\t{}", or_none(&self.username));
        println!("Age:\t\t{}", self.age);
        println!("Team ID:\t{}", or_none(&self.team_id));
    }
}

impl PrintFormatted for (Member, Member) {
    fn print_formatted(&self) {
        let (old, new) = self;
        let username_old = or_none(&old.username);
        let username_new = or_none(&new.username);
        let team_old = or_none(&old.team_id);
        let team_new = or_none(&new.team_id);

        let next_username = next_attr!(username_old, username_new);
        println!("Username:\t{}{}", username_old, next_username);
        let next_age = next_attr!(old, new, age);
        println!("Age:\t\t{}{}", old.age, next_age);
        let next_team = next_attr!(team_old, team_new);
        println!("Team ID:\t{}{}", team_old, next_team);
    }
}

impl PrintFormatted for Vec<Member> {
    fn print_formatted(&self) {
        println!("{:>4}\t{:<24}\t{:>4}\t{:>8}", "ID", "Username", "Age", "Team ID");
        println!("{:-<60}", "-");
        for member in self {
            println!(
                "{:>4}\t{:<24}\t{:>4}\t{:>8}",
                member.id,
                member.display_name(),
                member.age,
                or_none(&member.team_id),
            );
        }
    }
}

impl PrintFormatted for Vec<Team> {
    fn print_formatted(&self) {
        println!("{:>4}\t{:<24}", "ID", "Name");
        println!("{:-<40}", "-");
        for team in self {
            println!("{:>4}\t{:<24}", team.id, team.name);
        }
    }
}

impl PrintFormatted for Vec<MemberTeam> {
    fn print_formatted(&self) {
        println!(
            "{:>4}\t{:<24}\t{:>4}\t{:>8}\t{:<24}",
            "ID", "Username", "Age", "Team ID", "Team"
        );
        println!("{:-<90}", "-");
        for row in self {
            println!(
                "{:>4}\t{:<24}\t{:>4}\t{:>8}\t{:<24}",
                row.member_id,
                or_none(&row.username),
                row.age,
                or_none(&row.team_id),
                or_none(&row.team_name),
            );
        }
    }
}

impl PrintFormatted for Page<MemberTeam> {
    fn print_formatted(&self) {
        println!(
            "Page {} of {} ({} members in total).",
            self.number() + 1,
            self.total_pages().max(1),
            self.total
        );
        self.content.print_formatted();
    }
}

impl PrintFormatted for AgeStats {
    fn print_formatted(&self) {
        println!("Members:\t{}", self.count);
        println!("Age Sum:\t{}", or_none(&self.sum));
        println!("Age Avg:\t{}", or_none(&self.avg));
        println!("Age Min:\t{}", or_none(&self.min));
        println!("Age Max:\t{}", or_none(&self.max));
    }
}

impl PrintFormatted for Vec<TeamAgeStats> {
    fn print_formatted(&self) {
        println!("{:<24}\t{:>8}", "Team", "Avg Age");
        println!("{:-<40}", "-");
        for stats in self {
            println!("{:<24}\t{:>8.2}", stats.team_name, stats.avg_age);
        }
    }
}
