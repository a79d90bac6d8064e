use expect_test::{Expect, expect};
use lilo::{Handler, OptionSpec, Positional, ProgramSpec, help::render};

use crate::fixtures;

fn check(program: &ProgramSpec, program_name: &str, command: Option<&str>, expect: Expect) {
    expect.assert_eq(&render(program_name, command, program));
}

#[test]
fn root_lists_subcommands() {
    check(
        &fixtures::foo(),
        "foo-cli",
        None,
        expect![[r#"

            foo-cli
            test cli description

            USAGE:
                foo-cli

            SUBCOMMANDS:
                bar             bar subcommand
                zoo             zoo subcommand

            OPTIONS:
                --global-opt    available for all subcommands
        "#]],
    );
}

#[test]
fn subcommand_merges_options() {
    check(
        &fixtures::foo(),
        "foo-cli",
        Some("bar"),
        expect![[r#"

            foo-cli
            test cli description

            USAGE:
                foo-cli bar

            OPTIONS:
                --global-opt    available for all subcommands
                --bar-only      only foo bar cmd
        "#]],
    );
}

#[test]
fn long_descriptions_wrap() {
    check(
        &fixtures::foo(),
        "foo-cli",
        Some("zoo"),
        expect![[r#"

            foo-cli
            test cli description

            USAGE:
                foo-cli zoo

            OPTIONS:
                --global-opt    available for all subcommands
                --option-one    A really really really really really really really really really really really
                                really really really really really really really really really really really
                                really really really log description.
                --option-two-with-really-long-name
                                A somewhat resonably long description with extra words here and there
                --option-three  Option_with_uncomfortably_long_and_unbreakable_description_that_should_have_benn_on_multiple_lines
                --option-four   Option_with_uncomfortably_long_and_unbreakable_description_that_should_have_benn_on_multiple_lines
                                that also has a few spaces so only one line will stick out from the
                                descriopton, you should not write your documentation like this.
        "#]],
    );
}

#[test]
fn unknown_command_renders_root_help() {
    check(
        &fixtures::foo(),
        "foo-cli",
        Some("nope"),
        expect![[r#"

            foo-cli
            test cli description

            USAGE:
                foo-cli nope

            SUBCOMMANDS:
                bar             bar subcommand
                zoo             zoo subcommand

            OPTIONS:
                --global-opt    available for all subcommands
        "#]],
    );
}

#[test]
fn single_positional() {
    let program = fixtures::positional(
        "A command that expects one argument",
        Positional::one("item"),
    );

    check(
        &program,
        "foo",
        None,
        expect![[r#"

            foo
            A command that expects one argument

            USAGE:
                foo

            SUBCOMMANDS:
                bar <ITEM>      the only command
        "#]],
    );

    check(
        &program,
        "foo",
        Some("bar"),
        expect![[r#"

            foo
            A command that expects one argument

            USAGE:
                foo bar <ITEM>
        "#]],
    );
}

#[test]
fn multiple_positionals() {
    let program = fixtures::positional("A command that expects arguments", Positional::many("item"));

    check(
        &program,
        "foo",
        None,
        expect![[r#"

            foo
            A command that expects arguments

            USAGE:
                foo

            SUBCOMMANDS:
                bar <ITEM>...   the only command
        "#]],
    );

    check(
        &program,
        "foo",
        Some("bar"),
        expect![[r#"

            foo
            A command that expects arguments

            USAGE:
                foo bar <ITEM>...
        "#]],
    );
}

#[test]
fn valued_options_show_their_key() {
    let program = ProgramSpec::new("files", "Do things to files")
        .option(
            "output",
            OptionSpec::valued("--output", Handler::string())
                .name("-o")
                .describe("Where to write"),
        )
        .option(
            "jobs",
            OptionSpec::valued("-j", Handler::integer()).describe("How many at once"),
        );

    check(
        &program,
        "files",
        None,
        expect![[r#"

            files
            Do things to files

            USAGE:
                files

            OPTIONS:
                --output, -o <OUTPUT>
                                Where to write
                -j <JOBS>       How many at once
        "#]],
    );
}

#[test]
fn items_up_to_19_columns_share_the_line() {
    let program = ProgramSpec::new("wait", "Waits for things")
        .option(
            "times",
            OptionSpec::valued("--times", Handler::integer()).describe("How many times"),
        )
        .option(
            "secs",
            OptionSpec::valued("--timeout", Handler::number()).describe("How long to wait"),
        );

    check(
        &program,
        "wait",
        None,
        expect![[r#"

            wait
            Waits for things

            USAGE:
                wait

            OPTIONS:
                --times <TIMES> How many times
                --timeout <SECS>
                                How long to wait
        "#]],
    );
}

#[test]
fn line_breaks_in_descriptions_are_kept() {
    let program = ProgramSpec::new("multi", "Has a\nmultiline description").option(
        "y",
        OptionSpec::flag("--y").describe("one\ntwo"),
    );

    check(
        &program,
        "multi",
        None,
        expect![[r#"

            multi
            Has a
            multiline description

            USAGE:
                multi

            OPTIONS:
                --y             one
            two
        "#]],
    );
}
