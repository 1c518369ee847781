//! Static resolution tables
//!
//! The production configuration the driver feeds through the engine: which
//! dotted catalog paths back each appliance status code, program list, and
//! entity display name. Plain constructors returning owned maps so callers
//! hold the data explicitly instead of sharing module-level globals.
//!
//! Path strings address the vendor catalog layout and are carried verbatim.

use crate::resolver::{KeyPath, ResolutionTable};

fn codes(entries: &[(u32, &str)]) -> ResolutionTable {
    entries
        .iter()
        .map(|(code, path)| (code.to_string(), KeyPath::from(*path)))
        .collect()
}

/// Washing machine program phase codes.
pub fn washing_machine_phases() -> ResolutionTable {
    codes(&[
        (0, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
        (1, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
        (2, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
        (3, "WASHING_CMD&CTRL.PHASE_SPIN.TITLE"),
        (4, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
        (5, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
        (6, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
        (7, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
        (9, "WASHING_CMD&CTRL.PHASE_STEAM.TITLE"),
        (10, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
        (11, "WASHING_CMD&CTRL.PHASE_SPIN.TITLE"),
        (12, "WASHING_CMD&CTRL.PHASE_WEIGHTING.TITLE"),
        (13, "WASHING_CMD&CTRL.PHASE_WEIGHTING.TITLE"),
        (14, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
        (15, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
        (16, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
        (17, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
        (18, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
        (19, "WASHING_CMD&CTRL.PHASE_SCHEDULED.TITLE"),
        (20, "WASHING_CMD&CTRL.PHASE_TUMBLING.TITLE"),
        (24, "WASHING_CMD&CTRL.PHASE_REFRESH.TITLE"),
        (25, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
        (26, "WASHING_CMD&CTRL.PHASE_HEATING.TITLE"),
        (27, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
    ])
}

/// Overall machine operating mode codes, shared across appliance types.
pub fn machine_modes() -> ResolutionTable {
    codes(&[
        (0, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
        (1, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
        (3, "WASHING_CMD&CTRL.PHASE_PAUSE.TITLE"),
        (4, "WASHING_CMD&CTRL.PHASE_SCHEDULED.TITLE"),
        (5, "WASHING_CMD&CTRL.PHASE_SCHEDULED.TITLE"),
        (6, "WASHING_CMD&CTRL.PHASE_ERROR.TITLE"),
        (7, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
    ])
}

/// Tumble dryer program phase codes.
pub fn tumble_dryer_phases() -> ResolutionTable {
    codes(&[
        (0, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
        (1, "TD_CMD&CTRL.STATUS_PHASE.PHASE_HEAT_STROKE"),
        (2, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
        (3, "TD_CMD&CTRL.STATUS_PHASE.PHASE_COOLDOWN"),
        (13, "TD_CMD&CTRL.STATUS_PHASE.PHASE_COOLDOWN"),
        (14, "TD_CMD&CTRL.STATUS_PHASE.PHASE_HEAT_STROKE"),
        (15, "TD_CMD&CTRL.STATUS_PHASE.PHASE_HEAT_STROKE"),
        (16, "TD_CMD&CTRL.STATUS_PHASE.PHASE_COOLDOWN"),
        (18, "WASHING_CMD&CTRL.PHASE_TUMBLING.DASHBOARD_TITLE"),
        (19, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
        (20, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
    ])
}

/// Dishwasher program phase codes.
pub fn dishwasher_phases() -> ResolutionTable {
    codes(&[
        (0, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
        (1, "WASHING_CMD&CTRL.PHASE_PREWASH.TITLE"),
        (2, "WASHING_CMD&CTRL.PHASE_WASHING.TITLE"),
        (3, "WASHING_CMD&CTRL.PHASE_RINSE.TITLE"),
        (4, "WASHING_CMD&CTRL.PHASE_DRYING.TITLE"),
        (5, "WASHING_CMD&CTRL.PHASE_READY.TITLE"),
        (6, "WASHING_CMD&CTRL.PHASE_HOT_RINSE.TITLE"),
    ])
}

/// Tumble dryer target dry-level codes.
pub fn dry_levels() -> ResolutionTable {
    codes(&[
        (0, "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_MAIN_OPTIONS.NO_DRY"),
        (1, "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OPTIONS_VALUES_DESCRIPTION.IRON_DRY"),
        (2, "WASHING_CMD&CTRL.GUIDED_WASHING_SYMBOLS_DRYING.NO_DRY_IRON_TITLE"),
        (3, "WASHING_CMD&CTRL.GUIDED_WASHING_SYMBOLS_DRYING.CUPBOARD_DRY_TITLE"),
        (4, "WASHING_CMD&CTRL.GUIDED_WASHING_SYMBOLS_DRYING.EXTRA_DRY_TITLE"),
        (12, "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OPTIONS_VALUES_DESCRIPTION.IRON_DRY"),
        (13, "WASHING_CMD&CTRL.GUIDED_WASHING_SYMBOLS_DRYING.CUPBOARD_DRY_TITLE"),
        (14, "WASHING_CMD&CTRL.GUIDED_WASHING_SYMBOLS_DRYING.READY_TO_WEAR_TITLE"),
        (15, "WASHING_CMD&CTRL.GUIDED_WASHING_SYMBOLS_DRYING.EXTRA_DRY_TITLE"),
    ])
}

/// Code tables written under the `sensor` category, in pass order.
pub fn sensor_code_tables() -> Vec<(&'static str, ResolutionTable)> {
    vec![
        ("washing_modes", machine_modes()),
        ("program_phases_wm", washing_machine_phases()),
        ("program_phases_td", tumble_dryer_phases()),
        ("program_phases_dw", dishwasher_phases()),
        ("dry_levels", dry_levels()),
    ]
}

/// Code tables written under the `select` category, in pass order.
pub fn select_code_tables() -> Vec<(&'static str, ResolutionTable)> {
    vec![("dry_levels", dry_levels())]
}

/// Program-list fields whose `state` is replaced wholesale from the catalog
/// each pass. Values are the `group.subgroup` extraction paths.
pub fn program_key_sets() -> Vec<(&'static str, &'static str)> {
    vec![
        ("programs_dw", "PROGRAMS.DW"),
        ("programs_ih", "PROGRAMS.IH"),
        ("programs_ov", "PROGRAMS.OV"),
        ("programs_td", "PROGRAMS.TD"),
        ("programs_wm", "PROGRAMS.WM_WD"),
    ]
}

/// Display-name paths per entity category, in pass order.
pub fn entity_name_paths() -> Vec<(&'static str, Vec<(&'static str, KeyPath)>)> {
    vec![
        (
            "switch",
            vec![
                ("anti_crease", "HDRY_CMD&CTRL.PROGRAM_CYCLE_DETAIL.ANTICREASE_TITLE".into()),
                ("add_dish", "DW_CMD&CTRL.c.ADD_DISH".into()),
                ("eco_express", "DW_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.ECO".into()),
                ("extra_dry", "DW_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.EXTRA_DRY".into()),
                ("half_load", "DW_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.HALF_LOAD".into()),
                ("open_door", "DW_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.OPEN_DOOR".into()),
                ("three_in_one", "DW_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.THREE_IN_ONE".into()),
                ("preheat", "OV.PROGRAM_DETAIL.PREHEAT".into()),
                ("dish_washer", "GLOBALS.APPLIANCES_NAME.DW".into()),
                ("tumble_dryer", "GLOBALS.APPLIANCES_NAME.TD".into()),
                ("washing_machine", "GLOBALS.APPLIANCES_NAME.WM".into()),
                ("washer_dryer", "GLOBALS.APPLIANCES_NAME.WD".into()),
                ("oven", "GLOBALS.APPLIANCES_NAME.OV".into()),
                ("prewash", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.PREWASH".into()),
                ("pause", "GENERAL.PAUSE_PROGRAM".into()),
                ("keep_fresh", "GLOBALS.APPLIANCE_STATUS.TUMBLING".into()),
                ("delay_time", "HINTS.TIPS_TIME_ENERGY_SAVING.TIPS_USE_AT_NIGHT_TITLE".into()),
            ],
        ),
        (
            "binary_sensor",
            vec![
                ("door_lock", "WASHING_CMD&CTRL.CHECK_UP_RESULTS.DOOR_LOCK".into()),
                ("extra_rinse_1", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.EXTRARINSE1".into()),
                ("extra_rinse_2", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.EXTRARINSE2".into()),
                ("extra_rinse_3", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.EXTRARINSE3".into()),
                ("good_night", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.GOODNIGHT".into()),
                ("anti_crease", "HDRY_CMD&CTRL.PROGRAM_CYCLE_DETAIL.ANTICREASE_TITLE".into()),
                ("aqua_plus", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.ACQUAPLUS".into()),
                ("spin_speed", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_MAIN_OPTIONS.SPINSPEED".into()),
                ("still_hot", "IH.COILS_STATUS.STILL_HOT".into()),
                ("pan_status", "IH.COILS_STATUS.PAN".into()),
                ("remote_control", "OV.SUPPORT.REMOTE_CONTROL".into()),
                ("rinse_aid", "DW_CMD&CTRL.MAINTENANCE.CONSUMABLE_LEVELS_ICON_RINSE_AID".into()),
                ("salt_level", "DW_CMD&CTRL.MAINTENANCE.CONSUMABLE_LEVELS_ICON_SALT".into()),
                ("door_open", "GLOBALS.APPLIANCE_STATUS.DOOR_OPEN".into()),
                ("connection", "ENROLLMENT_COMMON.HEADER_NAME.STEP_APPLIANCE_CONNECTION".into()),
                ("child_lock", "AP.FOOTER_MENU_MORE.SECURITY_LOCK_TITLE".into()),
                ("on", "GLOBALS.GENERAL.ON".into()),
                ("prewash", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_OTHER_OPTIONS.PREWASH".into()),
            ],
        ),
        (
            "button",
            vec![("induction_hob", "GLOBALS.APPLIANCES_NAME.IH".into())],
        ),
        (
            "select",
            vec![
                ("dry_levels", "WASHING_CMD&CTRL.DRAWER_CYCLE_DRYING.TAB_LEVEL".into()),
                ("dry_time", "WASHING_CMD&CTRL.DRAWER_CYCLE_DRYING.TAB_TIME".into()),
                ("spin_speed", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_MAIN_OPTIONS.SPINSPEED".into()),
                ("temperature", "IH.COMMON.TEMPERATURE".into()),
                ("programs_dw", "WC.SET_PROGRAM.PROGRAM".into()),
                ("programs_ih", "WC.SET_PROGRAM.PROGRAM".into()),
                ("programs_ov", "WC.SET_PROGRAM.PROGRAM".into()),
                ("programs_td", "WC.SET_PROGRAM.PROGRAM".into()),
                ("programs_wm", "WC.SET_PROGRAM.PROGRAM".into()),
            ],
        ),
        (
            "sensor",
            vec![
                ("dry_levels", "WASHING_CMD&CTRL.DRAWER_CYCLE_DRYING.TAB_LEVEL".into()),
                ("dry_time", "WASHING_CMD&CTRL.DRAWER_CYCLE_DRYING.TAB_TIME".into()),
                ("power", "OV.RECIPE_DETAIL.POWER_LEVEL".into()),
                ("remaining_time", "ENROLLMENT_COMMON.GENERAL.REMAINING_TIME".into()),
                ("temperature", "IH.COMMON.TEMPERATURE".into()),
                ("water_efficiency", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_RESULT.WATER_EFFICIENCY".into()),
                ("water_saving", "STATISTICS.SMART_AI_CYCLE.WATER_SAVING".into()),
                ("duration", "WASHING_CMD&CTRL.DRAWER_PROGRAM_FILTERS.DURATION".into()),
                ("target_temperature", "IH.COOKING_DETAIL.TEMPERATURE_TARGETING".into()),
                ("spin_speed", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_MAIN_OPTIONS.SPINSPEED".into()),
                ("steam_leve", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_MAIN_OPTIONS.STEAM_LEVEL".into()),
                ("dirt_level", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_MAIN_OPTIONS.DIRTY_LEVEL".into()),
                ("program_phases_wm", "WASHING_CMD&CTRL.STATISTICS_GRAPHIC_INSTANT_CONSUMPTION.PHASE".into()),
                ("program_phases_td", "WASHING_CMD&CTRL.STATISTICS_GRAPHIC_INSTANT_CONSUMPTION.PHASE".into()),
                ("program_phases_dw", "WASHING_CMD&CTRL.STATISTICS_GRAPHIC_INSTANT_CONSUMPTION.PHASE".into()),
                ("delay_time", "HINTS.TIPS_TIME_ENERGY_SAVING.TIPS_USE_AT_NIGHT_TITLE".into()),
                ("suggested_load", "WASHING_CMD&CTRL.DRAWER_PROGRAM_FILTERS.LOAD_CAPACITY".into()),
                ("energy_label", "WASHING_CMD&CTRL.DRAWER_PROGRAM_FILTERS.ENERGY_EFFICIENCY".into()),
                ("det_dust", "HUBS.WIDGET.STAINS_WIDGET.STAINS.SUGGESTED_DET_DUST".into()),
                ("det_liquid", "HUBS.WIDGET.STAINS_WIDGET.STAINS.SUGGESTED_DET_LIQUID".into()),
                ("errors", "ROBOT_CMD&CTRL.PHASE_ERROR.TITLE".into()),
                ("programs", "OV.TABS.CURRENT_PROGRAM".into()),
                (
                    "cycles_total",
                    ["WASHING_CMD&CTRL.GENERAL.CYCLES", "WC.VIRTUAL_WINE_STATS_COUNTRY.TOTAL"].into(),
                ),
                (
                    "energy_total",
                    ["MISE.ENERGY_CONSUMPTION.TITLE", "WC.VIRTUAL_WINE_STATS_COUNTRY.TOTAL"].into(),
                ),
                (
                    "water_total",
                    [
                        "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_RESULT.WATER_EFFICIENCY",
                        "WC.VIRTUAL_WINE_STATS_COUNTRY.TOTAL",
                    ]
                    .into(),
                ),
                (
                    "energy_current",
                    ["MISE.ENERGY_CONSUMPTION.TITLE", "CUBE90_GLOBAL.GENERAL.CURRENT"].into(),
                ),
                (
                    "water_current",
                    [
                        "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL_RESULT.WATER_EFFICIENCY",
                        "CUBE90_GLOBAL.GENERAL.CURRENT",
                    ]
                    .into(),
                ),
            ],
        ),
        (
            "number",
            vec![
                ("power_management", "HINTS.COOKING_WITH_INDUCTION.POWER_MANAGEMENT".into()),
                ("temperature", "IH.COMMON.TEMPERATURE".into()),
                ("delay_time", "HINTS.TIPS_TIME_ENERGY_SAVING.TIPS_USE_AT_NIGHT_TITLE".into()),
                ("water_hard", "WASHING_CMD&CTRL.DASHBOARD_MENU_MORE_SETTINGS_WATER.TITLE".into()),
                ("program_duration", "OV.PROGRAM_DETAIL.PROGRAM_DURATION".into()),
                ("target_temperature", "IH.COOKING_DETAIL.TEMPERATURE_TARGETING".into()),
                ("rinse_iterations", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL.DRAWER_HEADER_RINSE".into()),
                ("wash_time", "WASHING_CMD&CTRL.PROGRAM_CYCLE_DETAIL.WASHING_TIME".into()),
                ("dry_time", "WASHING_CMD&CTRL.DRAWER_CYCLE_DRYING.TAB_TIME".into()),
            ],
        ),
    ]
}
