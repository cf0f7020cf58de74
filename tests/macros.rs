use std::error::Error;
use std::ops::ControlFlow;
use std::time::Duration;

use seriatim::task::sleep;

#[seriatim::test]
async fn just_sleep() -> Result<(), Box<dyn Error>> {
    sleep(Duration::from_millis(10)).await;
    Ok(())
}

#[seriatim::test]
async fn traversals_run_inside_test_bodies() -> anyhow::Result<()> {
    let list = ["1", "2", "x"];
    let parsed = seriatim::iter::map(&list, |s, _| async move { s.parse::<u32>() }).await;
    anyhow::ensure!(parsed == [1, 2], "unexpected output: {parsed:?}");
    Ok(())
}

#[seriatim::test]
#[should_panic(expected = "stopped")]
async fn attributes_are_kept() {
    let list = [1];
    let flow = seriatim::iter::each(&list, |_, _| async { ControlFlow::Break("stopped") }).await;
    if let ControlFlow::Break(reason) = flow {
        panic!("{reason}");
    }
}
