// Mirrors the DDL rendered from crate::tables::TABLES.

diesel::table! {
    experiments (id) {
        id -> Integer,
        name -> Text,
        description -> Nullable<Text>,
    }
}

diesel::table! {
    experimenters (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    rats (id) {
        id -> Integer,
        name -> Text,
        birthdate -> Nullable<Date>,
    }
}

diesel::table! {
    sessions (id) {
        id -> Integer,
        experiment_id -> Integer,
        experimenter_id -> Integer,
        rat_id -> Integer,
        date -> Date,
        time -> Time,
        video_filename -> Nullable<Text>,
        motive_take_filename -> Nullable<Text>,
    }
}

diesel::table! {
    conditions (id) {
        id -> Integer,
        name -> Text,
        description -> Nullable<Text>,
        experiment_id -> Integer,
    }
}

diesel::table! {
    levels (id) {
        id -> Integer,
        name -> Text,
        description -> Nullable<Text>,
    }
}

diesel::table! {
    trackingobjects (id) {
        id -> Integer,
        name -> Text,
        system -> Nullable<Text>,
    }
}

diesel::table! {
    trackingdata (id) {
        id -> Integer,
        condition_id -> Nullable<Integer>,
        session_id -> Nullable<Integer>,
        trackingobject_id -> Nullable<Integer>,
        time -> Time,
        motive_timestamp -> Nullable<BigInt>,
        is_visible -> Nullable<Bool>,
        x -> Double,
        y -> Double,
        z -> Double,
        rot_x -> Nullable<Double>,
        rot_y -> Nullable<Double>,
        rot_z -> Nullable<Double>,
        rot_qx -> Nullable<Double>,
        rot_qy -> Nullable<Double>,
        rot_qz -> Nullable<Double>,
        rot_qw -> Nullable<Double>,
        ori_x -> Nullable<Double>,
        ori_y -> Nullable<Double>,
        ori_z -> Nullable<Double>,
    }
}

diesel::joinable!(sessions -> experiments (experiment_id));
diesel::joinable!(sessions -> experimenters (experimenter_id));
diesel::joinable!(sessions -> rats (rat_id));
diesel::joinable!(conditions -> experiments (experiment_id));
diesel::joinable!(trackingdata -> conditions (condition_id));
diesel::joinable!(trackingdata -> sessions (session_id));
diesel::joinable!(trackingdata -> trackingobjects (trackingobject_id));

diesel::allow_tables_to_appear_in_same_query!(
    experiments,
    experimenters,
    rats,
    sessions,
    conditions,
    levels,
    trackingobjects,
    trackingdata,
);
