/*!
# Commands

The first word of a line selects the command, in any letter case. A line
whose words do not fit the command's shape does nothing. Unknown commands
do nothing either.
*/

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod ASSIGNMENT;

#[path = "statements/calc.rs"]
#[allow(non_snake_case)]
pub mod CALC;

#[path = "statements/chp.rs"]
#[allow(non_snake_case)]
pub mod CHP;

#[path = "statements/con.rs"]
#[allow(non_snake_case)]
pub mod CON;

#[path = "statements/exit.rs"]
#[allow(non_snake_case)]
pub mod EXIT;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/random.rs"]
#[allow(non_snake_case)]
pub mod RANDOM;

#[path = "statements/rpl.rs"]
#[allow(non_snake_case)]
pub mod RPL;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;

#[path = "statements/save.rs"]
#[allow(non_snake_case)]
pub mod SAVE;

#[path = "statements/wait.rs"]
#[allow(non_snake_case)]
pub mod WAIT;
