mod intent_test;
